use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(author, version, about = "Match history dashboard", long_about = None)]
pub struct Args {
    /// Address to listen on (falls back to BIND_ADDR, then 127.0.0.1:5000)
    #[arg(long)]
    pub bind: Option<String>,
    /// Round journal to show alongside the sample games
    #[arg(long)]
    pub history: Option<PathBuf>,
}

impl Args {
    pub fn addr(&self) -> String {
        self.bind
            .clone()
            .or_else(|| std::env::var("BIND_ADDR").ok())
            .unwrap_or_else(|| crate::DASHBOARD_ADDR.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn explicit_bind_wins() {
        let args = Args::parse_from(["dashboard", "--bind", "0.0.0.0:9000"]);
        assert_eq!(args.addr(), "0.0.0.0:9000");
        assert!(args.history.is_none());
    }
}
