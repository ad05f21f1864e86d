/// When to append the trailing `Root = <expr>` alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RootAlias {
    /// Alias when the root expression's text contains `]` (`List[..]`,
    /// `Union[..]`). Primitive and `$ref` roots get no alias.
    #[default]
    Bracket,
    /// Alias whenever the root did not itself produce a declaration.
    Shape,
}

/// What to do when two declarations share a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CollisionPolicy {
    /// Emit both and log a warning.
    #[default]
    Warn,
    /// Fail the conversion.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub root_alias: RootAlias,
    /// Property name used for the document root; capitalized into the
    /// root declaration's name.
    pub root_name: String,
    pub collisions: CollisionPolicy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            root_alias: RootAlias::default(),
            root_name: "root".to_string(),
            collisions: CollisionPolicy::default(),
        }
    }
}
