//! CLI structure using clap

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use kratka_core::ParameterOverrides;
use std::path::PathBuf;

const LONG_ABOUT: &str = "\
Create a PDF containing a single page of graph paper.

The PDF is typeset with pdflatex from a built-in LaTeX template (print it with
--show-template). By default the page holds a 43x64 grid of 4.25mm cells.
Pass - as OUTPUT to write the PDF to standard output.";

const AFTER_LONG_HELP: &str = "\
Values:
  LENGTH  a LaTeX length: 1cm, -2.34cm, 3.0mm, 4pt, 5in, 6ex, 7em
  WIDTH   a TikZ line width: ultra thin, very thin, thin, semithick, thick,
          very thick, ultra thick, line width=5pt
  COLOR   a TikZ color: gray, blue, red, blue!40
  STYLE   a TikZ dash pattern: solid, dotted, densely dotted, dashed,
          densely dashed, dash dot, dash dot dot

Values are passed to LaTeX unchecked; pdflatex reports invalid ones.

Configuration file (--config):
  [page]     margin, horizontal_offset, vertical_offset, show_frame
  [grid]     cell_width, cell_height, step, columns, rows
  [line]     width, color, style
  [compiler] program
Command-line flags and environment variables override the file.

Examples:
  Default grid drawn with dotted lines:
    kratka --line-style dotted grid.pdf
  Default grid shifted 2mm to the left:
    kratka --horizontal-offset -2mm grid.pdf

Requirements:
  A LaTeX installation with the memoir, geometry and tikz packages, and
  pdflatex on PATH (or --compiler).";

#[derive(Parser, Debug)]
#[command(name = "kratka")]
#[command(version, about = "Create a single page of graph paper as PDF")]
#[command(long_about = LONG_ABOUT, after_long_help = AFTER_LONG_HELP)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Print the full help text, value syntax and examples included
    #[arg(short = 'h', long, action = ArgAction::HelpLong)]
    pub help: Option<bool>,

    /// Destination PDF file, or - for standard output
    #[arg(value_name = "OUTPUT", required_unless_present = "show_template")]
    pub output: Option<String>,

    /// Margin around the grid [default: 1cm]
    #[arg(long, value_name = "LENGTH", allow_hyphen_values = true, env = "KRATKA_MARGIN")]
    pub margin: Option<String>,

    /// Horizontal shift of the grid [default: 0cm]
    #[arg(
        long,
        visible_alias = "hoffset",
        value_name = "LENGTH",
        allow_hyphen_values = true,
        env = "KRATKA_HORIZONTAL_OFFSET"
    )]
    pub horizontal_offset: Option<String>,

    /// Vertical shift of the grid [default: 0cm]
    #[arg(
        long,
        visible_alias = "voffset",
        value_name = "LENGTH",
        allow_hyphen_values = true,
        env = "KRATKA_VERTICAL_OFFSET"
    )]
    pub vertical_offset: Option<String>,

    /// Draw the page layout reference frame [default: false]
    #[arg(
        long,
        visible_alias = "showframe",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        env = "KRATKA_SHOW_FRAME"
    )]
    pub show_frame: Option<bool>,

    /// Horizontal size of a cell [default: 4.25mm]
    #[arg(
        long,
        visible_alias = "boxsizex",
        value_name = "LENGTH",
        allow_hyphen_values = true,
        env = "KRATKA_CELL_WIDTH"
    )]
    pub cell_width: Option<String>,

    /// Vertical size of a cell [default: 4.25mm]
    #[arg(
        long,
        visible_alias = "boxsizey",
        value_name = "LENGTH",
        allow_hyphen_values = true,
        env = "KRATKA_CELL_HEIGHT"
    )]
    pub cell_height: Option<String>,

    /// Distance between grid lines [default: 4.25mm]
    #[arg(long, value_name = "LENGTH", allow_hyphen_values = true, env = "KRATKA_STEP")]
    pub step: Option<String>,

    /// Line width [default: very thin]
    #[arg(
        long,
        visible_alias = "linewidth",
        value_name = "WIDTH",
        env = "KRATKA_LINE_WIDTH"
    )]
    pub line_width: Option<String>,

    /// Line color [default: gray]
    #[arg(
        long,
        visible_alias = "linecolor",
        value_name = "COLOR",
        env = "KRATKA_LINE_COLOR"
    )]
    pub line_color: Option<String>,

    /// Line style [default: solid]
    #[arg(
        long,
        visible_alias = "linestyle",
        value_name = "STYLE",
        env = "KRATKA_LINE_STYLE"
    )]
    pub line_style: Option<String>,

    /// Number of cells across [default: 43]
    #[arg(
        long,
        visible_alias = "gridsizex",
        value_name = "INT",
        allow_negative_numbers = true,
        env = "KRATKA_GRID_COLUMNS"
    )]
    pub grid_columns: Option<i64>,

    /// Number of cells down [default: 64]
    #[arg(
        long,
        visible_alias = "gridsizey",
        value_name = "INT",
        allow_negative_numbers = true,
        env = "KRATKA_GRID_ROWS"
    )]
    pub grid_rows: Option<i64>,

    /// Print the temporary workspace path and keep it
    #[arg(long, visible_alias = "work")]
    pub preserve_workspace: bool,

    /// Print the LaTeX template and exit
    #[arg(long, visible_alias = "template")]
    pub show_template: bool,

    /// Read defaults from a TOML configuration file
    #[arg(long, value_name = "FILE", env = "KRATKA_CONFIG")]
    pub config: Option<PathBuf>,

    /// LaTeX compiler program or path [default: pdflatex]
    #[arg(long, value_name = "PROGRAM", env = "KRATKA_COMPILER")]
    pub compiler: Option<String>,

    /// Log every step to standard error
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parameter values given on the command line or in the environment
    pub fn overrides(&self) -> ParameterOverrides {
        ParameterOverrides {
            margin: self.margin.clone(),
            horizontal_offset: self.horizontal_offset.clone(),
            vertical_offset: self.vertical_offset.clone(),
            show_frame: self.show_frame,
            cell_width: self.cell_width.clone(),
            cell_height: self.cell_height.clone(),
            step: self.step.clone(),
            line_width: self.line_width.clone(),
            line_color: self.line_color.clone(),
            line_style: self.line_style.clone(),
            grid_columns: self.grid_columns,
            grid_rows: self.grid_rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("kratka").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_required() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_show_template_without_output() {
        let cli = parse(&["--show-template"]).unwrap();
        assert!(cli.show_template);
        assert!(cli.output.is_none());

        assert!(parse(&["--template"]).unwrap().show_template);
    }

    #[test]
    fn test_dash_is_an_output() {
        let cli = parse(&["-"]).unwrap();
        assert_eq!(cli.output.as_deref(), Some("-"));
    }

    #[test]
    fn test_negative_lengths() {
        let cli = parse(&["--horizontal-offset", "-2mm", "--voffset", "-1cm", "x.pdf"]).unwrap();
        assert_eq!(cli.horizontal_offset.as_deref(), Some("-2mm"));
        assert_eq!(cli.vertical_offset.as_deref(), Some("-1cm"));
        assert_eq!(cli.output.as_deref(), Some("x.pdf"));
    }

    #[test]
    fn test_show_frame_forms() {
        assert_eq!(parse(&["x.pdf"]).unwrap().show_frame, None);
        assert_eq!(
            parse(&["--show-frame", "x.pdf"]).unwrap().show_frame,
            Some(true)
        );
        assert_eq!(
            parse(&["--show-frame=false", "x.pdf"]).unwrap().show_frame,
            Some(false)
        );
        assert_eq!(
            parse(&["--showframe", "x.pdf"]).unwrap().show_frame,
            Some(true)
        );
    }

    #[test]
    fn test_show_frame_accepts_boolish_values() {
        for (value, expected) in [("1", true), ("t", true), ("yes", true), ("0", false), ("f", false)] {
            let arg = format!("--show-frame={value}");
            assert_eq!(
                parse(&[&arg, "x.pdf"]).unwrap().show_frame,
                Some(expected),
                "{arg}"
            );
        }
    }

    #[test]
    fn test_short_and_long_help_print_full_text() {
        for flag in ["-h", "--help"] {
            let err = parse(&[flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
            assert_eq!(err.exit_code(), 0);

            let text = err.to_string();
            assert!(text.contains("densely dotted"), "{flag}: {text}");
            assert!(text.contains("Examples"), "{flag}: {text}");
            assert!(text.contains("memoir"), "{flag}: {text}");
        }
    }

    #[test]
    fn test_legacy_aliases() {
        let cli = parse(&[
            "--boxsizex",
            "5mm",
            "--boxsizey",
            "6mm",
            "--linewidth",
            "thick",
            "--linecolor",
            "red",
            "--linestyle",
            "dotted",
            "--gridsizex",
            "10",
            "--gridsizey",
            "20",
            "--work",
            "x.pdf",
        ])
        .unwrap();

        let overrides = cli.overrides();
        assert_eq!(overrides.cell_width.as_deref(), Some("5mm"));
        assert_eq!(overrides.cell_height.as_deref(), Some("6mm"));
        assert_eq!(overrides.line_width.as_deref(), Some("thick"));
        assert_eq!(overrides.line_color.as_deref(), Some("red"));
        assert_eq!(overrides.line_style.as_deref(), Some("dotted"));
        assert_eq!(overrides.grid_columns, Some(10));
        assert_eq!(overrides.grid_rows, Some(20));
        assert!(cli.preserve_workspace);
    }

    #[test]
    fn test_multi_word_values() {
        let cli = parse(&["--line-width", "line width=2pt", "x.pdf"]).unwrap();
        assert_eq!(cli.line_width.as_deref(), Some("line width=2pt"));
    }

    #[test]
    fn test_invalid_integer() {
        let err = parse(&["--grid-columns", "many", "x.pdf"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_unknown_flag() {
        let err = parse(&["--colour", "red", "x.pdf"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
