use anyhow::Context;
use clap::Parser;
use img_compress::constants::PROGRESS_SPINNER_TEMPLATE;
use img_compress::logger::init_logger;
use img_compress::{compress_image, describe_result, prepare_output_dir, Args};
use indicatif::{ProgressBar, ProgressStyle};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    prepare_output_dir(&args.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            args.output_dir.display()
        )
    })?;

    let request = args.into_request();

    let pb = create_progress_spinner("Compressing image...");
    let result = compress_image(&request);
    pb.finish_and_clear();

    // Failures are reported, not propagated: the exit status stays 0.
    println!("{}", describe_result(&result));

    Ok(())
}

fn create_progress_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template(PROGRESS_SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb
}
