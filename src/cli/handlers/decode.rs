use crate::cli::{args::DecodeArgs, global::GlobalArgs, handlers::see::warning_prefix};
use name_viz::{DecodedText, Settings, decode_binary, decode_hex};
use std::io::{self, IsTerminal};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let hex = args.hex.filter(|s| !s.is_empty());
    let bin = args.bin.filter(|s| !s.is_empty());

    let bytes = match (hex, bin) {
        (Some(_), Some(_)) => {
            return Err("please provide either --hex or --bin, not both".into());
        }
        (Some(hex), None) => decode_hex(&hex)?,
        (None, Some(bin)) => decode_binary(&bin)?,
        (None, None) => return Err("no input provided; use --hex or --bin".into()),
    };

    let decoded = DecodedText::from_bytes(&bytes);
    if let Some(warning) = decoded.warning() {
        let color = global.color(settings, io::stdout().is_terminal());
        println!("{} {}", warning_prefix(color), warning);
    }
    println!("Decoded UTF-8: {}", decoded.text);
    println!("Byte count: {}", decoded.byte_count);

    Ok(())
}
