use iet::catalog::{Icon, NavItem, NavSection, Registry};

#[test]
fn builtin_summary_counts_sections_and_routes() {
    let registry = Registry::builtin();
    let summary = iet::init(&registry);

    assert_eq!(summary.sections, 6);
    assert_eq!(summary.routes, registry.all_routes().len());
    assert_eq!(summary.prefix_collisions, 0);
}

#[test]
fn summary_reports_collisions() {
    static ITEMS: [NavItem; 2] =
        [NavItem::new("Pareto", "/pareto"), NavItem::new("Pareto Chart", "/pareto-chart")];
    static SECTIONS: [NavSection; 1] = [NavSection::new("Quantitative", Icon::BarChart, &ITEMS)];

    let summary = iet::init(&Registry::new(&SECTIONS));
    assert_eq!(summary.prefix_collisions, 1);
    assert_eq!(summary.routes, 2);
}
