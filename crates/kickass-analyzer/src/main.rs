use clap::Parser;
use tower_lsp::{LspService, Server};
use tracing::info;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use kickass_analyzer::KickAssLanguageServer;

#[derive(Parser, Debug)]
#[command(name = "kickass-analyzer", version, about)]
struct Args {
    #[arg(long, short)]
    verbose: bool,

    /// Also log every LSP message tower-lsp handles.
    #[arg(long)]
    log_messages: bool,

    #[arg(long)]
    log_file: Option<String>,
}

fn default_log_path() -> std::path::PathBuf {
    dirs_or_tmp().join("kickass-analyzer.log")
}

fn dirs_or_tmp() -> std::path::PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        let dir = std::path::PathBuf::from(home).join(".kickass-analyzer");
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    std::env::temp_dir()
}

/// `EnvFilter` directives for the stderr layer and the log file. The file
/// always records rebuild timings and skipped report lines.
fn filter_directives(
    verbose: bool,
    log_messages: bool,
) -> (String, String) {
    let analyzer_level = if verbose { "debug" } else { "info" };
    let (stderr_tower_lsp, file_tower_lsp) = if log_messages { ("debug", "debug") } else { ("warn", "info") };
    (
        format!("kickass_analyzer={analyzer_level},tower_lsp={stderr_tower_lsp}"),
        format!("kickass_analyzer=debug,tower_lsp={file_tower_lsp}"),
    )
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let (stderr_directives, file_directives) = filter_directives(args.verbose, args.log_messages);
    let stderr_filter = EnvFilter::new(stderr_directives);
    let file_filter = EnvFilter::new(file_directives);

    let log_path = args.log_file.as_ref().map(std::path::PathBuf::from).unwrap_or_else(default_log_path);

    let file_appender = tracing_appender::rolling::never(
        log_path.parent().unwrap_or(std::path::Path::new(".")),
        log_path.file_name().unwrap_or(std::ffi::OsStr::new("kickass-analyzer.log")),
    );

    let file_layer = fmt::layer().with_writer(file_appender).with_ansi(false).with_target(false).with_filter(file_filter);

    let stderr_layer =
        fmt::layer().with_writer(std::io::stderr).with_ansi(false).with_target(false).with_filter(stderr_filter);

    tracing_subscriber::registry().with(file_layer).with(stderr_layer).init();

    info!("Starting kickass-analyzer v{}", env!("CARGO_PKG_VERSION"));
    info!("Log file: {}", log_path.display());

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(KickAssLanguageServer::new);

    Server::new(stdin, stdout, socket).serve(service).await;

    info!("kickass-analyzer stopped");
}

#[cfg(test)]
#[path = "../tests/src/main_tests.rs"]
mod tests;
