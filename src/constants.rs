//! Constants used throughout Blueprint Architect

/// Name of the blueprint configuration file expected at a workspace root
pub const CONFIG_FILENAME: &str = ".blueprint-architect.json";

/// Template tokens recognised in `path` and `content` templates
pub mod tokens {
    pub const PASCAL_CASE: &str = "Name_pascalCase";
    pub const KEBAB_CASE: &str = "Name_kebabCase";
    pub const SNAKE_CASE: &str = "Name_snakeCase";
}

/// Access tiers shown next to blueprint names
pub mod tiers {
    /// The blueprint that is always available
    pub const FREE_BLUEPRINT: &str = "reactComponent";

    /// Blueprints that require a license
    pub const PAID_BLUEPRINTS: &[&str] =
        &["utilityFunction", "zustandSlice", "expressRoute", "apiHook"];

    pub const FREE_LABEL: &str = "free";
    pub const PAID_LABEL: &str = "paid (locked)";
}

/// Blueprints whose generated sources get a user-selected extension
pub const COMPONENT_BLUEPRINTS: &[&str] = &[
    "reactComponent",
    "reactArrowComponent",
    "reactNamedExportComponent",
    "reactClassComponent",
    "reactHook",
];

/// Output extensions offered for component-like blueprints, with descriptions
pub const EXTENSION_CHOICES: &[(&str, &str)] = &[
    ("tsx", "TypeScript React (recommended)"),
    ("jsx", "JavaScript React"),
    ("ts", "TypeScript (no JSX)"),
    ("js", "JavaScript (no JSX)"),
];

/// Path safety rules applied to every rendered path
pub mod safety {
    pub const INVALID_PATH_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*'];

    pub const RESERVED_NAMES: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6",
        "COM7", "COM8", "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7",
        "LPT8", "LPT9",
    ];
}

/// Prompt texts
pub mod prompts {
    pub const SELECT_BLUEPRINT: &str = "Select a blueprint to generate";
    pub const ENTER_NAME: &str = "Enter the base name for your component";
    pub const SELECT_EXTENSION: &str = "Select file extension for generated files";
    pub const EMPTY_NAME: &str = "Name cannot be empty.";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
