use std::io::{BufRead, Write};

use clap::{Parser, ValueEnum};

use morse_transcoder::{Console, Transcoder};
use crate::error::{Result, TranscoderError};

const HELP_TEXT: &str = r#"
>    Morse code groups should be separated by a space.

>    Short should be the period key (.) and long should be a hyphen (-).

>    / - Forward slash should be used to separate words.

>    Example: ".... . .-.. .-.. --- / .-- --- .-. .-.. -.." is "HELLO WORLD".
"#;

#[derive(Parser, Debug)]
#[command(name = "morse")]
#[command(about = "Translate text to Morse code and back")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Translate text to Morse code
    morse encode

    # Translate Morse code to text
    morse decode

    # Show the supported characters
    morse list
"#)]
pub struct Cli {
    /// Mode to run: encode (t2m), decode (m2t), help or list (translations)
    #[arg(value_name = "MODE", allow_hyphen_values = true, trailing_var_arg = true)]
    pub selectors: Vec<String>,
}

impl Cli {
    /// Resolve the single mode selector given on the command line.
    pub fn mode(&self) -> Result<Mode> {
        match self.selectors.as_slice() {
            [] => Err(usage_error("You must specify an argument.")),
            [selector] => Mode::from_str(selector, true).map_err(|_| unrecognized()),
            _ => Err(usage_error("You must specify only one argument.")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Text to Morse code
    #[value(alias = "t2m")]
    Encode,

    /// Morse code to text
    #[value(alias = "m2t")]
    Decode,

    /// How to use the application
    Help,

    /// List of translatable characters
    #[value(alias = "translations")]
    List,
}

/// Usage error raised when the argument parser itself rejects the command line
pub fn unrecognized() -> TranscoderError {
    usage_error("You may only specify the following arguments.")
}

fn usage_error(reason: &str) -> TranscoderError {
    let valid = Mode::value_variants()
        .iter()
        .filter_map(|mode| mode.to_possible_value())
        .map(|value| {
            let names = value
                .get_name_and_aliases()
                .map(|name| format!("\"{}\"", name))
                .collect::<Vec<_>>()
                .join(", ");
            match value.get_help() {
                Some(help) => format!("{} - {}.", names, help),
                None => names,
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    TranscoderError::Usage {
        reason: reason.to_string(),
        valid,
    }
}

pub fn run<R: BufRead, W: Write>(
    mode: Mode,
    transcoder: &Transcoder<'_>,
    console: &mut Console<R, W>,
) -> Result<()> {
    tracing::debug!("Running {:?}", mode);
    match mode {
        Mode::Encode => text_to_morse(transcoder, console),
        Mode::Decode => morse_to_text(transcoder, console),
        Mode::Help => help_text(console),
        Mode::List => translations(transcoder, console),
    }
}

pub fn text_to_morse<R: BufRead, W: Write>(
    transcoder: &Transcoder<'_>,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.write_line("Enter the text to be translated.")?;
    let text = console.prompt("> ")?;
    let translation = transcoder.encode(&text);

    console.write_line(&format!("Text: {}\nMorse code: {}", text, translation))
}

pub fn morse_to_text<R: BufRead, W: Write>(
    transcoder: &Transcoder<'_>,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.write_line("Enter the Morse code to be translated.")?;
    let morse = console.prompt("> ")?;
    let translation = transcoder.decode(&morse);

    console.write_line(&format!("Morse code: {}\nTranslation: {}", morse, translation))
}

pub fn help_text<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.write_line(HELP_TEXT)
}

pub fn translations<R: BufRead, W: Write>(
    transcoder: &Transcoder<'_>,
    console: &mut Console<R, W>,
) -> Result<()> {
    for line in transcoder.table().listing() {
        console.write_line(&line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("morse").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    fn run_with_input(mode: Mode, input: &str) -> String {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run(mode, &Transcoder::default(), &mut console).expect("run should succeed");
        String::from_utf8(console.into_writer()).expect("utf-8 output")
    }

    #[test]
    fn test_mode_selection() {
        assert_eq!(cli(&["encode"]).mode().unwrap(), Mode::Encode);
        assert_eq!(cli(&["t2m"]).mode().unwrap(), Mode::Encode);
        assert_eq!(cli(&["decode"]).mode().unwrap(), Mode::Decode);
        assert_eq!(cli(&["m2t"]).mode().unwrap(), Mode::Decode);
        assert_eq!(cli(&["help"]).mode().unwrap(), Mode::Help);
        assert_eq!(cli(&["list"]).mode().unwrap(), Mode::List);
        assert_eq!(cli(&["translations"]).mode().unwrap(), Mode::List);
        assert_eq!(cli(&["ENCODE"]).mode().unwrap(), Mode::Encode);
    }

    #[test]
    fn test_missing_selector() {
        let err = cli(&[]).mode().unwrap_err();
        match err {
            TranscoderError::Usage { reason, valid } => {
                assert_eq!(reason, "You must specify an argument.");
                assert!(valid.contains("\"t2m\""));
                assert!(valid.contains("\"translations\""));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_too_many_selectors() {
        let err = cli(&["encode", "decode"]).mode().unwrap_err();
        assert!(matches!(
            err,
            TranscoderError::Usage { ref reason, .. } if reason == "You must specify only one argument."
        ));
    }

    #[test]
    fn test_escape_token_counts_as_selector() {
        let parsed = cli(&["help", "--"]);
        assert_eq!(parsed.selectors, vec!["help".to_string(), "--".to_string()]);

        let err = parsed.mode().unwrap_err();
        assert!(err.to_string().starts_with("You must specify only one argument."));
    }

    #[test]
    fn test_unrecognized_selector() {
        let err = cli(&["morse"]).mode().unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("You may only specify the following arguments."));
        assert!(message.contains("\"encode\", \"t2m\" - Text to Morse code."));
        assert!(message.contains("\"list\", \"translations\" - List of translatable characters."));
    }

    #[test]
    fn test_encode_session() {
        let output = run_with_input(Mode::Encode, "sos\n");
        assert_eq!(
            output,
            "Enter the text to be translated.\n> Text: sos\nMorse code: ... --- ... \n"
        );
    }

    #[test]
    fn test_decode_session() {
        let output = run_with_input(Mode::Decode, ".... ..\r\n");
        assert_eq!(
            output,
            "Enter the Morse code to be translated.\n> Morse code: .... ..\nTranslation: HI\n"
        );
    }

    #[test]
    fn test_decode_session_at_eof() {
        let output = run_with_input(Mode::Decode, "");
        assert!(output.ends_with("Morse code: \nTranslation: #\n"));
    }

    #[test]
    fn test_help_does_not_read_input() {
        let mut console = Console::new(Cursor::new(b"unused\n".to_vec()), Vec::new());
        run(Mode::Help, &Transcoder::default(), &mut console).unwrap();
        assert_eq!(console.read_line().unwrap(), "unused");

        let output = String::from_utf8(console.into_writer()).unwrap();
        assert!(output.contains("/ - Forward slash should be used to separate words."));
        assert!(output.contains("is \"HELLO WORLD\""));
    }

    #[test]
    fn test_list_prints_every_symbol() {
        let output = run_with_input(Mode::List, "");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 39);
        assert_eq!(lines[0], "A | .-");
        assert!(lines.iter().all(|line| line.split(" | ").count() == 2));
    }
}
