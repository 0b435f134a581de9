/// Backend features that change how forced fields compile and write.
#[derive(Debug)]
pub struct Capability {
    /// Supports the `ON UPDATE CURRENT_TIMESTAMP` column modifier, an
    /// implicit trigger refreshing the column on every row update.
    pub on_update_current_timestamp: bool,

    /// Character used to quote identifiers.
    pub identifier_quote: char,

    /// Supports `INSERT ... RETURNING`.
    pub returning: bool,

    /// Largest length accepted by a `CHAR(n)` column, if the database
    /// enforces one.
    pub max_char_length: Option<u64>,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        on_update_current_timestamp: false,
        identifier_quote: '"',
        returning: true,

        // SQLite gives any type containing "CHAR" TEXT affinity and ignores
        // the length specifier.
        max_char_length: None,
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        max_char_length: Some(10_485_760),
        ..Self::SQLITE
    };

    /// MySQL capabilities
    pub const MYSQL: Self = Self {
        on_update_current_timestamp: true,
        identifier_quote: '`',
        returning: false,
        max_char_length: Some(255),
    };

    /// Capabilities assumed for a backend that is not recognized.
    pub const GENERIC: Self = Self {
        returning: false,
        ..Self::SQLITE
    };
}
