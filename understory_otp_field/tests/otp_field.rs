// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_otp_field` crate.
//!
//! These drive [`OtpField`] through whole typing sessions with a recording
//! renderer and a delegate that logs every callback, checking focus, the
//! entry buffer, delegate traffic, and slot styling together.

use kurbo::{Point, Size};
use peniko::Color;
use peniko::color::palette::css;
use understory_otp_field::recording::{RecordingFactory, RecordingSlot};
use understory_otp_field::{
    FieldStyle, InputOutcome, KeyboardClass, OtpConfig, OtpDelegate, OtpField, Palette,
    PasteBehavior, Rejection, SlotDecoration, SlotSpec, SlotVisual,
};

const CONTAINER: Size = Size::new(400.0, 120.0);

#[derive(Debug, PartialEq)]
enum Event {
    CanActivate(usize),
    Entered(String),
    Completed(bool),
}

#[derive(Debug, Default)]
struct Recorder {
    events: Vec<Event>,
    accept: Option<&'static str>,
}

impl Recorder {
    fn accepting(code: &'static str) -> Self {
        Self {
            events: Vec::new(),
            accept: Some(code),
        }
    }

    fn entered(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Entered(code) => Some(code.as_str()),
                _ => None,
            })
            .collect()
    }

    fn completions(&self) -> Vec<bool> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Completed(all) => Some(*all),
                _ => None,
            })
            .collect()
    }
}

impl OtpDelegate for Recorder {
    fn can_activate(&mut self, index: usize) -> bool {
        self.events.push(Event::CanActivate(index));
        true
    }

    fn did_enter_code(&mut self, code: &str) {
        self.events.push(Event::Entered(code.to_owned()));
    }

    fn input_completed(&mut self, all_entered: bool) -> bool {
        self.events.push(Event::Completed(all_entered));
        let last = self.entered().last().map(|code| code.to_string());
        all_entered && self.accept.is_some() && last.as_deref() == self.accept
    }
}

fn error_palette() -> Palette {
    Palette {
        default_background: css::WHITE,
        filled_background: css::LIGHT_GRAY,
        default_border: css::GRAY,
        filled_border: css::GREEN,
        error_border: Some(css::RED),
        text: css::BLACK,
    }
}

fn build(config: OtpConfig, delegate: Recorder) -> OtpField<RecordingFactory, Recorder> {
    let mut field = OtpField::with_delegate(config, RecordingFactory::default(), delegate);
    field.initialize(CONTAINER).unwrap();
    field
}

fn type_all(field: &mut OtpField<RecordingFactory, Recorder>, text: &str) -> Vec<InputOutcome> {
    text.chars()
        .map(|c| field.insert_at_focus(c.encode_utf8(&mut [0; 4])))
        .collect()
}

fn borders(field: &OtpField<RecordingFactory, Recorder>) -> Vec<Color> {
    field
        .slots()
        .iter()
        .map(|slot| slot.renderer().border.0)
        .collect()
}

#[test]
fn rejected_code_is_reported_once_and_painted_red() {
    let mut field = build(
        OtpConfig::default().with_palette(error_palette()),
        Recorder::default(),
    );
    let outcomes = type_all(&mut field, "9125");

    assert_eq!(
        outcomes,
        [
            InputOutcome::Filled,
            InputOutcome::Filled,
            InputOutcome::Filled,
            InputOutcome::Completed { valid: false },
        ]
    );
    assert_eq!(field.entered_code(), "9125");
    assert_eq!(field.delegate().entered(), ["9125"]);
    assert_eq!(borders(&field), [css::RED; 4]);
    assert_eq!(field.focused(), None);
}

#[test]
fn accepted_code_keeps_filled_colors() {
    let mut field = build(
        OtpConfig::default().with_palette(error_palette()),
        Recorder::accepting("4711"),
    );
    let outcomes = type_all(&mut field, "4711");
    assert_eq!(outcomes.last(), Some(&InputOutcome::Completed { valid: true }));
    assert_eq!(borders(&field), [css::GREEN; 4]);
    for slot in field.slots() {
        assert_eq!(slot.visual(), SlotVisual::Filled);
        assert_eq!(slot.renderer().background, css::LIGHT_GRAY);
    }
}

#[test]
fn missing_error_color_falls_back_to_filled_border() {
    let palette = Palette {
        error_border: None,
        ..error_palette()
    };
    let mut field = build(OtpConfig::default().with_palette(palette), Recorder::default());
    type_all(&mut field, "0000");
    assert_eq!(borders(&field), [css::GREEN; 4]);
    assert!(field.slots().iter().all(|s| s.visual() == SlotVisual::Error));
}

#[test]
fn field_without_delegate_marks_complete_code_as_error() {
    let palette = Palette {
        error_border: None,
        ..error_palette()
    };
    let mut field = OtpField::new(
        OtpConfig::default().with_palette(palette),
        RecordingFactory::default(),
    );
    field.initialize(CONTAINER).unwrap();
    for digit in ["3", "1", "4"] {
        assert_eq!(field.insert_at_focus(digit), InputOutcome::Filled);
    }
    assert_eq!(
        field.insert_at_focus("1"),
        InputOutcome::Completed { valid: false }
    );
    for slot in field.slots() {
        assert_eq!(slot.visual(), SlotVisual::Error);
        assert_eq!(slot.renderer().border.0, css::GREEN);
    }
}

#[test]
fn correcting_a_rejected_code_notifies_again() {
    let mut field = build(
        OtpConfig::default().with_palette(error_palette()),
        Recorder::accepting("1235"),
    );
    type_all(&mut field, "1234");
    assert_eq!(borders(&field), [css::RED; 4]);

    assert_eq!(field.backspace(3), InputOutcome::Deleted);
    assert_eq!(borders(&field), [css::GREEN, css::GREEN, css::GREEN, css::GRAY]);
    assert_eq!(field.focused(), Some(2));

    assert!(field.request_focus(3));
    assert_eq!(
        field.insert_at_focus("5"),
        InputOutcome::Completed { valid: true }
    );
    assert_eq!(field.delegate().entered(), ["1234", "1235"]);
    assert_eq!(borders(&field), [css::GREEN; 4]);
}

#[test]
fn every_keystroke_reports_completion_status() {
    let mut field = build(OtpConfig::default(), Recorder::default());
    type_all(&mut field, "12");
    field.backspace_at_focus();
    assert_eq!(field.delegate().completions(), [false, false, false]);
    assert!(field.delegate().entered().is_empty());
}

#[test]
fn focus_requests_consult_the_delegate() {
    let mut field = build(OtpConfig::default(), Recorder::default());
    assert_eq!(field.delegate().events, [Event::CanActivate(0)]);
    field.insert_at_focus("1");
    assert_eq!(
        field.delegate().events[1..],
        [Event::CanActivate(1), Event::Completed(false)]
    );
}

#[test]
fn backspace_walks_left_through_empty_slots() {
    let mut field = build(OtpConfig::default(), Recorder::default());
    type_all(&mut field, "12");
    assert_eq!(field.focused(), Some(2));

    // Slot 2 is empty: the deletion lands on slot 1.
    field.backspace_at_focus();
    assert_eq!(field.entry().iter().collect::<Vec<_>>(), ["1", "", "", ""]);
    assert_eq!(field.focused(), Some(1));

    // Slot 1 is empty too: slot 0 is cleared.
    field.backspace_at_focus();
    assert_eq!(field.entry().filled_count(), 0);
    assert_eq!(field.focused(), Some(0));

    // Nothing left to delete.
    field.backspace_at_focus();
    assert_eq!(field.entry().filled_count(), 0);
    assert_eq!(field.focused(), Some(0));
}

#[test]
fn backspace_on_focused_last_slot_clears_it() {
    let mut field = build(OtpConfig::default(), Recorder::default());
    type_all(&mut field, "123");
    assert!(field.request_focus(3));
    field.insert(3, "4");
    field.request_focus(3);
    field.backspace(3);
    assert_eq!(field.entered_code(), "123");
    assert_eq!(field.focused(), Some(2));
    assert!(field.slot(2).unwrap().renderer().focused);
    assert!(!field.slot(3).unwrap().renderer().focused);
}

#[test]
fn secure_entry_masks_display_only() {
    let mut field = build(
        OtpConfig::default().with_secure_entry(true),
        Recorder::default(),
    );
    field.insert(0, "7");
    assert_eq!(field.entry().iter().collect::<Vec<_>>(), ["7", "", "", ""]);
    assert_eq!(field.slot(0).unwrap().renderer().text, "\u{2022}");
    assert_eq!(field.entered_code(), "7");
}

#[test]
fn hidden_text_wins_over_secure_entry() {
    let mut field = build(
        OtpConfig::default()
            .with_secure_entry(true)
            .with_hidden_text(true),
        Recorder::default(),
    );
    type_all(&mut field, "12");
    assert_eq!(field.slot(0).unwrap().renderer().text, " ");
    assert_eq!(field.slot(1).unwrap().renderer().text, " ");
    assert_eq!(field.entered_code(), "12");
}

#[test]
fn alphabetic_keyboard_filters_input() {
    let mut field = build(
        OtpConfig::default().with_keyboard(KeyboardClass::Alphabetic),
        Recorder::default(),
    );
    assert_eq!(
        field.insert_at_focus("3"),
        InputOutcome::Rejected(Rejection::KeyboardMismatch)
    );
    assert_eq!(field.delegate().events, [Event::CanActivate(0)]);
    type_all(&mut field, "abCd");
    assert_eq!(field.entered_code(), "abCd");
}

#[test]
fn graphemes_are_kept_whole() {
    let mut field = build(
        OtpConfig::default()
            .with_field_count(2)
            .with_keyboard(KeyboardClass::AlphaNumeric),
        Recorder::default(),
    );
    field.insert(0, "e\u{301}");
    field.insert(1, "\u{1F44D}\u{1F3FD}");
    assert_eq!(field.entry().get(0), Some("e\u{301}"));
    assert_eq!(field.entry().get(1), Some("\u{1F44D}\u{1F3FD}"));
    assert!(field.is_complete());
}

#[test]
fn intermediate_editing_disabled() {
    let mut field = build(
        OtpConfig::default()
            .with_field_count(3)
            .with_intermediate_editing(false),
        Recorder::default(),
    );
    field.insert(0, "1");
    field.insert(1, "2");
    assert!(field.can_activate(2));
    assert!(field.can_activate(1));
    assert!(!field.can_activate(0));
}

#[test]
fn pasted_text_stays_in_one_slot_by_default() {
    let mut field = build(OtpConfig::default(), Recorder::default());
    assert_eq!(field.insert_at_focus("482913"), InputOutcome::Filled);
    assert_eq!(field.entered_code(), "4");
    assert_eq!(field.focused(), Some(1));
}

#[test]
fn distributed_paste_completes_in_one_step() {
    let mut field = build(
        OtpConfig::default()
            .with_field_count(6)
            .with_paste(PasteBehavior::Distribute),
        Recorder::accepting("482913"),
    );
    assert_eq!(
        field.insert_at_focus("482913"),
        InputOutcome::Completed { valid: true }
    );
    assert_eq!(field.delegate().entered(), ["482913"]);
    assert_eq!(field.delegate().completions(), [true]);
    assert_eq!(field.focused(), None);
}

#[test]
fn distributed_paste_truncates_at_last_slot() {
    let mut field = build(
        OtpConfig::default().with_paste(PasteBehavior::Distribute),
        Recorder::default(),
    );
    field.insert(2, "5678");
    assert_eq!(field.entry().iter().collect::<Vec<_>>(), ["", "", "5", "6"]);
}

#[test]
fn outline_styles_build_path_decorations() {
    let mut field = build(
        OtpConfig::default()
            .with_style(FieldStyle::Underlined)
            .with_palette(error_palette()),
        Recorder::default(),
    );
    for slot in field.slots() {
        let spec = &slot.renderer().spec;
        assert!(matches!(
            spec.decoration,
            SlotDecoration::Outline { clip: false, .. }
        ));
        assert_eq!(slot.renderer().path_stroke, Some(css::GRAY));
    }
    type_all(&mut field, "0000");
    for slot in field.slots() {
        let renderer = slot.renderer();
        assert_eq!(renderer.path_stroke, Some(css::RED));
        assert_eq!(renderer.path_fill, Some(css::LIGHT_GRAY));
        // The slot's own box is left alone.
        assert_eq!(renderer.background, css::WHITE);
        assert_eq!(renderer.border.0, css::GRAY);
    }
}

#[test]
fn specs_carry_configuration() {
    let config = OtpConfig::default()
        .with_keyboard(KeyboardClass::AlphaNumeric)
        .with_metrics(48.0, 8.0, 2.0);
    let field = build(config, Recorder::default());
    for (index, slot) in field.slots().iter().enumerate() {
        let spec: &SlotSpec = &slot.renderer().spec;
        assert_eq!(spec.index, index);
        assert_eq!(spec.keyboard, KeyboardClass::AlphaNumeric);
        assert_eq!(spec.frame.width(), 48.0);
        assert_eq!(
            spec.decoration,
            SlotDecoration::Bordered {
                corner_radius: 24.0,
                border_width: 2.0
            }
        );
    }
}

#[test]
fn taps_route_through_hit_testing() {
    let mut field = build(OtpConfig::default(), Recorder::default());
    let tap = field.slots()[2].frame().center();
    let index = field.slot_at(tap).unwrap();
    assert!(field.request_focus(index));
    assert_eq!(field.focused(), Some(2));
    assert_eq!(field.slot_at(Point::new(1.0, 1.0)), None);
}

#[test]
fn closure_factories_work() {
    let mut built = 0;
    let mut field = OtpField::new(OtpConfig::default().with_field_count(3), |spec: &SlotSpec| {
        built += 1;
        RecordingSlot::from_spec(spec)
    });
    field.initialize(CONTAINER).unwrap();
    field.insert_at_focus("1");
    assert_eq!(field.slots().len(), 3);
    assert_eq!(field.entered_code(), "1");
    drop(field);
    assert_eq!(built, 3);
}
