use std::path::PathBuf;

use clap::{Args, Parser};
use module_info_gen::config::GeneratorKind;
use module_info_gen::fetch::HttpFetcher;
use module_info_gen::generate;

#[derive(Parser)]
#[command(name = "module-info-gen")]
#[command(version, about = "Generates module info from script API documentation pages")]
struct Cli {
    /// Where to output generated files to
    #[arg(long)]
    output: PathBuf,

    #[command(flatten)]
    sources: Sources,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct Sources {
    /// Doc URLs to get GameTest module info from
    #[arg(long = "gametest_urls", num_args = 1..)]
    gametest_urls: Vec<String>,

    /// Doc URLs to get Script API module info from
    #[arg(long = "script_api_urls", alias = "script-api-urls", num_args = 1..)]
    script_api_urls: Vec<String>,
}

impl Sources {
    fn into_kind_and_urls(self) -> (GeneratorKind, Vec<String>) {
        if self.gametest_urls.is_empty() {
            (GeneratorKind::ScriptApi, self.script_api_urls)
        } else {
            (GeneratorKind::Gametest, self.gametest_urls)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = module_info_gen::logging::init();
    let (kind, urls) = cli.sources.into_kind_and_urls();

    let fetcher = HttpFetcher::new()?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(generate::run(kind, &urls, &cli.output, &fetcher))?;

    Ok(())
}
