//! Three-column layout demo: run with `cargo run --example lorem`.

use weft::prelude::*;

fn main() {
    let body = columns![
        text!("Lorem ipsum dolor sit amet, consectetur adipiscing elit."),
        text!(
            "Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
            Style::Red
        ),
        text!("Ut enim ad minim veniam, quis nostrud exercitation.", Style::Bold),
    ]
    .columns(3);

    let ui: Node = stack![text!("weft demo", Style::Bold, Style::Blue), body].into();

    match render(&ui) {
        Ok(output) => println!("{output}"),
        Err(err) => eprintln!("layout error: {err}"),
    }
}
