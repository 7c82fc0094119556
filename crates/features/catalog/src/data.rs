//! Built-in catalog: every section and tool of the toolkit, in display order.
//!
//! Form names point back at the desktop screens each route replaces.

use iet_domain::{Icon, NavItem, NavSection};

static STOPWATCH_STEPS: [NavItem; 3] = [
    NavItem::new("Observations", "/time-study/observations")
        .with_description("Record element readings cycle by cycle.")
        .with_form("frmObservations"),
    NavItem::new("Performance Rating", "/time-study/rating")
        .with_description("Level observed times to a normal pace.")
        .with_form("frmRating"),
    NavItem::new("Allowances", "/time-study/allowances")
        .with_icon(Icon::Coffee)
        .with_description("Personal, fatigue and delay allowances.")
        .with_form("frmAllowances"),
];

static TIME_STUDY: [NavItem; 4] = [
    NavItem::new("Stopwatch Study", "/time-study")
        .with_icon(Icon::Timer)
        .with_description("Direct time study from element breakdown to standard time.")
        .with_form("frmTimeStudy")
        .with_items(&STOPWATCH_STEPS),
    NavItem::new("Standard Data", "/standard-data")
        .with_icon(Icon::Table)
        .with_description("Build standard times from tabulated element data.")
        .with_form("frmStandardData"),
    NavItem::new("Predetermined Times", "/pmts")
        .with_icon(Icon::Clock)
        .with_description("MTM and MOST style motion time systems.")
        .with_form("frmPMTS"),
    NavItem::new("Sample Size", "/sample-size")
        .with_icon(Icon::Calculator)
        .with_description("Cycles to observe for a target accuracy and confidence.")
        .with_form("frmSampleSize"),
];

static WORK_SAMPLING: [NavItem; 3] = [
    NavItem::new("Calculator", "/work-sampling/calculator")
        .with_icon(Icon::Calculator)
        .with_description("Observations needed for a given proportion and precision.")
        .with_form("frmWSCalc"),
    NavItem::new("Random Schedule", "/work-sampling/schedule")
        .with_icon(Icon::Shuffle)
        .with_description("Random observation times across a shift.")
        .with_form("frmWSSchedule"),
    NavItem::new("Results", "/work-sampling/results")
        .with_icon(Icon::BarChart)
        .with_description("Activity proportions with confidence limits.")
        .with_form("frmWSResults"),
];

static LEARNING_CURVES: [NavItem; 4] = [
    NavItem::new("Unit Time", "/learning/unit")
        .with_icon(Icon::TrendingUp)
        .with_description("Time of the n-th unit for a given learning rate.")
        .with_form("frmLearnUnit"),
    NavItem::new("Cumulative Average", "/learning/cumulative")
        .with_icon(Icon::LineChart)
        .with_description("Cumulative average and total time over a run.")
        .with_form("frmLearnCum"),
    NavItem::new("Curve Fitting", "/learning/fit")
        .with_icon(Icon::LineChart)
        .with_description("Estimate the learning rate from recorded unit times.")
        .with_form("frmLearnFit"),
    NavItem::new("Unit Table", "/learning/table")
        .with_icon(Icon::Table)
        .with_description("Tabulated unit and cumulative factors.")
        .with_form("frmLearnTable"),
];

static ERGONOMICS: [NavItem; 7] = [
    NavItem::new("NIOSH Lifting Equation", "/ergonomics/niosh")
        .with_icon(Icon::Package)
        .with_description("Recommended weight limit and lifting index.")
        .with_form("frmNIOSH"),
    NavItem::new("RULA", "/ergonomics/rula")
        .with_icon(Icon::Activity)
        .with_description("Rapid upper limb assessment.")
        .with_form("frmRULA"),
    NavItem::new("REBA", "/ergonomics/reba")
        .with_icon(Icon::Activity)
        .with_description("Rapid entire body assessment.")
        .with_form("frmREBA"),
    NavItem::new("OWAS", "/ergonomics/owas")
        .with_icon(Icon::Activity)
        .with_description("Ovako working posture analysis.")
        .with_form("frmOWAS"),
    NavItem::new("Push/Pull Limits", "/ergonomics/snook")
        .with_icon(Icon::Scale)
        .with_description("Snook and Ciriello acceptable force tables.")
        .with_form("frmSnook"),
    NavItem::new("Anthropometry", "/ergonomics/anthropometry")
        .with_icon(Icon::Ruler)
        .with_description("Body dimension percentiles for workplace design.")
        .with_form("frmAnthropometry"),
    NavItem::new("Heat Stress", "/ergonomics/heat-stress")
        .with_icon(Icon::Thermometer)
        .with_description("WBGT index and work/rest regimen.")
        .with_form("frmHeatStress"),
];

static PSYCHOLOGY: [NavItem; 5] = [
    NavItem::new("Reaction Time", "/psychology/reaction-time")
        .with_icon(Icon::Zap)
        .with_description("Simple and choice reaction time trials.")
        .with_form("frmReaction"),
    NavItem::new("Tapping Test", "/psychology/tapping")
        .with_icon(Icon::Hand)
        .with_description("Motor speed by repeated tapping.")
        .with_form("frmTapping"),
    NavItem::new("Stroop Test", "/psychology/stroop")
        .with_icon(Icon::Brain)
        .with_description("Colour-word interference.")
        .with_form("frmStroop"),
    NavItem::new("Memory Span", "/psychology/memory-span")
        .with_icon(Icon::Brain)
        .with_description("Digit span recall.")
        .with_form("frmMemory"),
    NavItem::new("Vigilance", "/psychology/vigilance")
        .with_icon(Icon::Eye)
        .with_description("Sustained attention over a watch period.")
        .with_form("frmVigilance"),
];

static QUANTITATIVE: [NavItem; 5] = [
    NavItem::new("Pareto Analysis", "/quantitative/pareto")
        .with_icon(Icon::BarChart)
        .with_description("Rank causes and find the vital few.")
        .with_form("frmPareto"),
    NavItem::new("Line Balancing", "/quantitative/line-balancing")
        .with_icon(Icon::Layers)
        .with_description("Assign tasks to stations for a cycle time.")
        .with_form("frmLineBalance"),
    NavItem::new("Regression", "/quantitative/regression")
        .with_icon(Icon::LineChart)
        .with_description("Least-squares fit of paired data.")
        .with_form("frmRegression"),
    NavItem::new("Forecasting", "/quantitative/forecasting")
        .with_icon(Icon::TrendingUp)
        .with_description("Moving average and exponential smoothing.")
        .with_form("frmForecast"),
    NavItem::new("Break-even", "/quantitative/break-even")
        .with_icon(Icon::Gauge)
        .with_description("Break-even volume for competing methods.")
        .with_form("frmBreakEven"),
];

/// Every section of the toolkit, in display order.
pub static SECTIONS: [NavSection; 6] = [
    NavSection::new("Time Study", Icon::Timer, &TIME_STUDY),
    NavSection::new("Work Sampling", Icon::ClipboardList, &WORK_SAMPLING),
    NavSection::new("Learning Curves", Icon::TrendingUp, &LEARNING_CURVES),
    NavSection::new("Ergonomics", Icon::Activity, &ERGONOMICS),
    NavSection::new("Psychology Tests", Icon::Brain, &PSYCHOLOGY),
    NavSection::new("Quantitative Tools", Icon::BarChart, &QUANTITATIVE),
];
