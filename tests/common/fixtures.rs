//! Static inputs used across harnesses.

/// Inputs that trigger none of the phrase rules.
pub const NO_TRIGGER_INPUTS: &[&str] = &[
    "hello world",
    "Invoices from Alice this year",
    "urgent mail from my boss",
    "steve from accounting",
    "steven from last month",
    "1234567890",
    "   ",
    "ÄÖÜ Rechnungen",
];

/// (input, expected rule-based output) pairs covering every rule combination.
pub const RULE_CASES: &[(&str, &str)] = &[
    ("emails from Steve", r#"from:"Steve""#),
    ("report last week", "date:last_week"),
    ("invoice.pdf attached", "filename.extension:pdf"),
    ("FROM STEVE, LAST WEEK", r#"from:"Steve" date:last_week"#),
    ("from steve pdf", r#"from:"Steve" filename.extension:pdf"#),
    ("pdfs sent last week", "date:last_week filename.extension:pdf"),
    (
        "from Steve last week pdf",
        r#"from:"Steve" date:last_week filename.extension:pdf"#,
    ),
    (
        "pdf last week from steve",
        r#"from:"Steve" date:last_week filename.extension:pdf"#,
    ),
];

/// Raw model answers and the search string they should clean up to.
pub const MODEL_ANSWERS: &[(&str, &str)] = &[
    ("f alice d 1y invoice", "f alice d 1y invoice"),
    ("  (f alice or f bob) t carol d 365d \n", "(f alice or f bob) t carol d 365d"),
    ("```\nT urgent !T later d 7d\n```", "T urgent !T later d 7d"),
    ("`s invoice or s receipt d 30d`", "s invoice or s receipt d 30d"),
];
