// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! OTP field basics.
//!
//! Drive a four-slot code field headlessly: type a wrong code, correct it,
//! and print what each slot would show after every step.
//!
//! Run:
//! - `RUST_LOG=understory_otp_field=trace cargo run -p understory_demos --example otp_basics`

use kurbo::Size;
use peniko::color::palette::css;
use tracing_subscriber::EnvFilter;
use understory_otp_field::recording::RecordingFactory;
use understory_otp_field::{OtpConfig, OtpDelegate, OtpField, Palette};

/// Accepts a single known code.
struct Verifier {
    expected: &'static str,
    last: Option<String>,
}

impl OtpDelegate for Verifier {
    fn did_enter_code(&mut self, code: &str) {
        println!("  delegate: code entered: {code}");
        self.last = Some(code.to_owned());
    }

    fn input_completed(&mut self, all_entered: bool) -> bool {
        all_entered && self.last.as_deref() == Some(self.expected)
    }
}

fn show(field: &OtpField<RecordingFactory, Verifier>) {
    let row: Vec<String> = field
        .slots()
        .iter()
        .map(|slot| {
            let text = slot.renderer().text.as_str();
            let text = if text.is_empty() { "_" } else { text };
            let marker = if slot.is_focused() { "*" } else { " " };
            format!("[{text}{marker}{:?}]", slot.visual())
        })
        .collect();
    println!("  {}  code={:?}", row.join(" "), field.entered_code());
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = OtpConfig::default().with_palette(Palette {
        filled_border: css::GREEN,
        error_border: Some(css::RED),
        ..Palette::default()
    });
    println!(
        "config: {}",
        serde_json::to_string(&config).expect("config serializes")
    );

    let verifier = Verifier {
        expected: "9125",
        last: None,
    };
    let mut field = OtpField::with_delegate(config, RecordingFactory::default(), verifier);
    field
        .initialize(Size::new(320.0, 80.0))
        .expect("default config is valid");
    show(&field);

    for key in ["9", "1", "2", "6"] {
        println!("type {key:?}: {:?}", field.insert_at_focus(key));
        show(&field);
    }

    println!("backspace at 3: {:?}", field.backspace(3));
    show(&field);

    field.request_focus(3);
    println!("type \"5\": {:?}", field.insert_at_focus("5"));
    show(&field);

    tracing::info!(
        code = %field.entered_code(),
        created = field.factory().created,
        destroyed = field.factory().destroyed,
        "demo finished"
    );
}
