use std::path::PathBuf;

const LOCAL_DATABASE_URL: &str = "sqlite://persons.db";
// serverless platforms only allow writes under /tmp
const VERCEL_DATABASE_URL: &str = "sqlite:///tmp/persons.db";

#[derive(Clone, Debug)]
pub struct PersonsConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: String,
    pub static_dir: PathBuf,
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
    pub supabase_table: String,
}

impl PersonsConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| default_database_url(lookup("VERCEL").is_some()).to_string());

        let max_connections = lookup("MAX_CONNECTIONS")
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(5);

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string());

        let static_dir =
            PathBuf::from(lookup("STATIC_DIR").unwrap_or_else(|| "./static".to_string()));

        // blank values count as unset
        let supabase_url = lookup("SUPABASE_URL").filter(|v| !v.is_empty());
        let supabase_key = lookup("SUPABASE_KEY").filter(|v| !v.is_empty());

        let supabase_table = lookup("SUPABASE_TABLE").unwrap_or_else(|| "Products".to_string());

        Self {
            database_url,
            max_connections,
            bind_addr,
            static_dir,
            supabase_url,
            supabase_key,
            supabase_table,
        }
    }
}

pub fn default_database_url(on_vercel: bool) -> &'static str {
    if on_vercel {
        VERCEL_DATABASE_URL
    } else {
        LOCAL_DATABASE_URL
    }
}
