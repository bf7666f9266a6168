//! Site characteristics and domain constants
//!
//! Fixed facts about the Steam storefront and the Ámbito quote feed,
//! plus the literal strings used when composing a product description.

/// Steam storefront constants
pub mod store {
    /// Storefront base URL
    pub const BASE_URL: &str = "https://store.steampowered.com";

    /// Region used for `?cc=` and the region cookie
    pub const DEFAULT_REGION: &str = "AR";

    /// Mobile Chrome user agent; the store serves the full price block to it
    pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 6.0; Nexus 5 Build/MRA58N) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/129.0.0.0 Mobile Safari/537.36";

    pub const DEFAULT_ACCEPT_LANGUAGE: &str = "es-AR,es;q=0.8";

    /// Region selection plus age-gate bypass
    pub const DEFAULT_COOKIE: &str = "steamCountry=AR%7Cd1225bd89e683873618bd05873507837; timezoneOffset=-10800,0; birthtime=1037505601; wants_mature_content=1;";

    /// "I Have No Mouth, and I Must Scream", used as the default app id
    pub const SAMPLE_APP_ID: u32 = 245_390;
}

/// Ámbito crypto-dollar quote feed
pub mod exchange {
    pub const DOLAR_CRIPTO_URL: &str = "https://mercados.ambito.com/dolarcripto/variacion";
}

/// Description composition
pub mod description {
    /// Price value Steam reports for free-to-play titles
    pub const FREE_TIER_SENTINEL: &str = "0.00";

    /// Line break placed between the description and the price line
    pub const PRICE_LINE_BREAK: &str = " \r\n\n ";

    pub const FREE_MARKER: &str = "Free";

    /// Between the primary and converted price
    pub const PRICE_SEPARATOR: &str = " - ";

    /// Suffix appended to peso amounts
    pub const ARS_GLYPH: &str = "🧉";
}
