use anyhow::Context;
use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use webp_squeeze::cli::Args;
use webp_squeeze::codec::LibWebpCodec;
use webp_squeeze::{app, logger};

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Help and version go to stdout and succeed; usage errors exit 1.
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            return code;
        }
    };

    logger::set_quiet_mode(args.quiet);
    logger::set_verbose_mode(args.verbose);
    logger::init_tracing(args.verbose);

    match try_main(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            webp_squeeze::error!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: &Args) -> anyhow::Result<()> {
    let Some(path) = args.path.as_deref() else {
        Args::command().print_help()?;
        return Ok(());
    };

    let options = args.to_options();
    webp_squeeze::verbose!("Options: {:?}", options);

    app::run(&LibWebpCodec, path, &options)
        .with_context(|| format!("failed to convert {}", path.display()))?;

    Ok(())
}
