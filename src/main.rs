use std::path::Path;

use clap::Parser;
use fs_err as fs;

mod attachment;
mod catalog;
mod cli;
mod clipboard;
mod config;
mod errors;
mod log;
mod prompt;
mod provider;
mod render;
mod share;
mod state;
mod ux;
mod wire;

use clipboard::ClipboardWriter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let cfg = config::Config {
        model: args.model.clone(),
        timeout_secs: args.timeout_secs,
        artifacts_dir: args.artifacts_dir.clone(),
        ..config::Config::default()
    };

    if args.list_options {
        ux::show_catalog();
        return Ok(());
    }

    // Shared-link values first, explicit flags override.
    let mut form = state::FormState::default();
    if let Some(link) = &args.from_url {
        form.apply(share::decode(link));
    }
    form.apply(args.form_update());

    if let Some(path) = &args.attach {
        match attachment::attach(path) {
            Ok(record) => {
                if let Ok(meta) = fs::metadata(path) {
                    if meta.len() > attachment::SIZE_NOTICE_BYTES {
                        ux::notice_oversized(&record.file_name, meta.len());
                    }
                }
                form.set_attachment(record);
            }
            Err(err) => {
                ux::show_error(&err.to_string());
                return Ok(());
            }
        }
    }

    let compiled = prompt::compile(&form);
    ux::show_prompt(&compiled, &form);

    if args.share || args.copy {
        let query = share::encode(&form);
        let link = format!("{}?{query}", cfg.share_base_url.trim_end_matches('/'));

        let mut copied = false;
        if args.copy {
            match clipboard::ArboardClipboard::new() {
                Ok(mut writer) => match writer.write_text(&link) {
                    Ok(()) => copied = true,
                    Err(err) => ux::show_error(&err.to_string()),
                },
                Err(err) => ux::show_error(&err.to_string()),
            }
        }
        ux::show_share_link(&link, copied);
    }

    if args.generate {
        // One generation per invocation; a second trigger cannot exist here.
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok();

        let tx = log::Tx::new();
        if args.debug {
            log::print_planned_paths(Path::new(&cfg.artifacts_dir), &tx);
        }

        match provider::make_provider(&cfg, api_key) {
            Ok(prov) => {
                let request = prov.build_request(&compiled, form.attachment.as_ref());
                match prov.generate(&compiled, form.attachment.as_ref(), args.debug).await {
                    Ok(plan) => {
                        let saved = log::save_stage(
                            Path::new(&cfg.artifacts_dir),
                            &tx,
                            &compiled,
                            Some(&request),
                            Some(&plan),
                            args.save_request,
                            args.save_response,
                        )?;
                        if args.debug {
                            log::print_saved_paths("generate", &saved);
                        }
                        ux::show_plan(&plan);
                    }
                    Err(err) => ux::show_error(&err.to_string()),
                }
            }
            Err(err) => ux::show_error(&err.to_string()),
        }
    }

    Ok(())
}
