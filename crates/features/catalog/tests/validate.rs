use iet_catalog::{CatalogError, Icon, NavItem, NavSection, Registry};

#[test]
fn builtin_catalog_is_well_formed() {
    assert_eq!(Registry::builtin().validate(), Ok(()));
}

#[test]
fn builtin_catalog_has_no_prefix_collisions() {
    let collisions = Registry::builtin().prefix_collisions();
    assert!(collisions.is_empty(), "ambiguous routes: {collisions:?}");
}

#[test]
fn empty_section_is_rejected() {
    static SECTIONS: [NavSection; 1] = [NavSection::new("Empty", Icon::Info, &[])];

    let err = Registry::new(&SECTIONS).validate().expect_err("empty section");
    assert!(matches!(err, CatalogError::EmptySection { section: "Empty", .. }));
}

#[test]
fn duplicate_url_is_rejected_with_section_context() {
    static A: [NavItem; 1] = [NavItem::new("One", "/same")];
    static B: [NavItem; 1] = [NavItem::new("Two", "/same")];
    static SECTIONS: [NavSection; 2] =
        [NavSection::new("A", Icon::Info, &A), NavSection::new("B", Icon::Info, &B)];

    let err = Registry::new(&SECTIONS).validate().expect_err("duplicate url");
    assert!(matches!(err, CatalogError::DuplicateUrl { url: "/same", .. }));
    assert_eq!(err.to_string(), "Route is registered more than once (section 'B'): /same");
}

#[test]
fn relative_url_is_rejected() {
    static ITEMS: [NavItem; 1] = [NavItem::new("Relative", "relative")];
    static SECTIONS: [NavSection; 1] = [NavSection::new("S", Icon::Info, &ITEMS)];

    let err = Registry::new(&SECTIONS).validate().expect_err("relative url");
    assert!(matches!(err, CatalogError::InvalidUrl { url: "relative", .. }));
}

#[test]
fn grandchildren_are_rejected() {
    static GRANDCHILDREN: [NavItem; 1] = [NavItem::new("Leaf", "/a/b/c")];
    static CHILDREN: [NavItem; 1] = [NavItem::new("Child", "/a/b").with_items(&GRANDCHILDREN)];
    static ITEMS: [NavItem; 1] = [NavItem::new("Root", "/a").with_items(&CHILDREN)];
    static SECTIONS: [NavSection; 1] = [NavSection::new("S", Icon::Info, &ITEMS)];

    let err = Registry::new(&SECTIONS).validate().expect_err("too deep");
    assert!(matches!(err, CatalogError::NestedTooDeep { url: "/a/b", .. }));
}

#[test]
fn sibling_prefixes_are_flagged_but_children_are_not() {
    static CHILDREN: [NavItem; 1] = [NavItem::new("Details", "/quantitative/pareto/details")];
    static QUANT: [NavItem; 2] = [
        NavItem::new("Pareto", "/quantitative/pareto").with_items(&CHILDREN),
        NavItem::new("Pareto Chart", "/quantitative/pareto-chart"),
    ];
    static SECTIONS: [NavSection; 1] = [NavSection::new("Quantitative", Icon::BarChart, &QUANT)];

    let registry = Registry::new(&SECTIONS);
    let collisions = registry.prefix_collisions();

    assert_eq!(collisions.len(), 1);
    assert_eq!(collisions[0].prefix.url, "/quantitative/pareto");
    assert_eq!(collisions[0].shadowed.url, "/quantitative/pareto-chart");
    assert!(!collisions[0].crosses_sections());
    // Flagged, not fixed: lookup still resolves by order.
    assert_eq!(registry.section_by_url("/quantitative/pareto-chart").map(|s| s.title), Some("Quantitative"));
}

#[test]
fn cross_section_prefixes_are_marked() {
    static FIRST: [NavItem; 1] = [NavItem::new("Lift", "/lift")];
    static SECOND: [NavItem; 1] = [NavItem::new("Lifting Index", "/lifting-index")];
    static SECTIONS: [NavSection; 2] = [
        NavSection::new("Handling", Icon::Package, &FIRST),
        NavSection::new("Ergonomics", Icon::Activity, &SECOND),
    ];

    let collisions = Registry::new(&SECTIONS).prefix_collisions();
    assert_eq!(collisions.len(), 1);
    assert!(collisions[0].crosses_sections());
    assert_eq!(collisions[0].shadowed_section.title, "Ergonomics");
}
