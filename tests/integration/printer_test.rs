//! Integration tests for colored output

use ansiprint::{write_colored, Color, PrintOptions, RESET};

fn render(message: &str, color: &str, line_end: &str) -> String {
    let mut buf = Vec::new();
    write_colored(
        &mut buf,
        message,
        color,
        &PrintOptions::with_line_end(line_end),
    )
    .expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("output should be valid UTF-8")
}

#[test]
fn all_colors_render_exact_bytes() {
    for color in Color::ALL {
        let expected = format!("{}hi{}\n", color.escape_code(), RESET);

        assert_eq!(render("hi", color.name(), "\n"), expected);
        assert_eq!(
            render("hi", &color.name().to_uppercase(), "\n"),
            expected,
            "Failed for {:?}",
            color
        );
    }
}

#[test]
fn mixed_case_names_share_escape_code() {
    let lower = render("hi", "red", "\n");
    assert_eq!(render("hi", "Red", "\n"), lower);
    assert_eq!(render("hi", "RED", "\n"), lower);
    assert_eq!(lower, "\x1b[31mhi\x1b[0m\n");

    assert_eq!(render("hi", "BLUE", "\n"), "\x1b[34mhi\x1b[0m\n");
}

#[test]
fn unknown_color_prints_warning_then_plain_message() {
    let out = render("hi", "orange", "\n");
    let lines: Vec<&str> = out.split('\n').collect();

    assert_eq!(
        lines,
        vec![
            "(Warning: Color 'orange' not found. printing with default color.)",
            "hi",
            "",
        ]
    );
    assert!(!out.contains('\x1b'), "No escape bytes expected: {:?}", out);
}

#[test]
fn unknown_color_warning_keeps_caller_casing() {
    let out = render("hi", "ORANGE", "\n");
    assert!(out.starts_with("(Warning: Color 'ORANGE' not found."));
}

#[test]
fn custom_line_end_replaces_newline() {
    assert_eq!(render("hi", "yellow", "--"), "\x1b[33mhi\x1b[0m--");
    assert_eq!(render("hi", "yellow", ""), "\x1b[33mhi\x1b[0m");
}

#[test]
fn empty_message_still_wrapped() {
    assert_eq!(render("", "magenta", "\n"), "\x1b[35m\x1b[0m\n");
}

#[test]
fn embedded_escapes_and_control_chars_pass_through() {
    let message = "a\x1b[1mb\tc\rd\x07";
    let out = render(message, "green", "\n");
    assert_eq!(out, format!("\x1b[32m{}\x1b[0m\n", message));
}

#[test]
fn empty_color_name_falls_back() {
    let out = render("hi", "", "\n");
    assert_eq!(
        out,
        "(Warning: Color '' not found. printing with default color.)\nhi\n"
    );
}

#[test]
fn stdout_entry_points_return_ok() {
    use ansiprint::{print_colored, print_colored_with_end};

    assert!(print_colored("hi", "green").is_ok());
    assert!(print_colored("hi", "orange").is_ok());
    assert!(print_colored_with_end("", "White", "").is_ok());
    assert!(print_colored_with_end("hi", "", "\n").is_ok());
}
