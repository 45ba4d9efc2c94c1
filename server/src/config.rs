use clap::Parser;

/// Todo item CRUD service backed by SQLite.
#[derive(Parser, Debug, Clone)]
#[command(name = "todo-server")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    pub port: u16,

    /// SQLite database path (`:memory:` for a throwaway database)
    #[arg(long, short, default_value = "todo.db", env = "DB_CONN_STR")]
    pub database: String,
}

impl Cli {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
