use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Browse the dataset interactively (default)")]
    Browse,

    #[command(about = "Print the filtered, sorted name list")]
    List {
        #[arg(long, help = "Keep only names starting with this prefix")]
        prefix: Option<String>,

        #[arg(long, help = "Show at most this many entries")]
        limit: Option<usize>,
    },

    #[command(about = "Diagnose the dataset file")]
    Check,
}
