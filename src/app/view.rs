//! Application view
//!
//! Single-window form: unit system and entry mode at the top, measurement
//! fields with inline errors in the middle, derived results at the bottom.

use crate::app::{Message, State};
use crate::core::height::{InputMode, UnitSystem};
use crate::core::metrics::{ActivityLevel, Sex};
use iced::widget::{
    column, container, pick_list, row, rule, text, text_input, toggler,
};
use iced::{Alignment, Border, Color, Element, Length};
use strum::IntoEnumIterator;

pub const ACCENT: Color = Color {
    r: 0.55,
    g: 0.75,
    b: 0.95,
    a: 1.0,
};
pub const DANGER: Color = Color {
    r: 0.98,
    g: 0.45,
    b: 0.45,
    a: 1.0,
};
pub const TEXT_BRIGHT: Color = Color {
    r: 0.92,
    g: 0.92,
    b: 0.92,
    a: 1.0,
};
pub const TEXT_DIM: Color = Color {
    r: 0.60,
    g: 0.60,
    b: 0.62,
    a: 1.0,
};
const SURFACE: Color = Color {
    r: 0.13,
    g: 0.14,
    b: 0.16,
    a: 1.0,
};
const BORDER: Color = Color {
    r: 0.25,
    g: 0.26,
    b: 0.29,
    a: 1.0,
};

fn card_container(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(SURFACE.into()),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn view(state: &State) -> Element<'_, Message> {
    let content = column![
        column![
            text("Vitals").size(24).color(ACCENT),
            text("Body metrics from height, weight, and age")
                .size(13)
                .color(TEXT_DIM),
        ]
        .spacing(4),
        view_units_row(state),
        view_height_section(state),
        view_profile_section(state),
        rule::horizontal(1),
        view_results(state),
    ]
    .spacing(16)
    .padding(24)
    .max_width(560);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

fn view_units_row(state: &State) -> Element<'_, Message> {
    row![
        column![
            section_label("UNITS"),
            pick_list(
                UnitSystem::iter().collect::<Vec<_>>(),
                Some(state.unit_system),
                Message::UnitSystemSelected,
            )
            .padding(8)
            .width(Length::Fill),
        ]
        .spacing(4)
        .width(Length::FillPortion(1)),
        column![
            section_label("SPLIT HEIGHT ENTRY"),
            row![
                toggler(state.height_form.input_mode == InputMode::Dual)
                    .on_toggle(Message::InputModeToggled)
                    .size(20)
                    .width(Length::Shrink),
                text("Feet + leftover").size(14).color(TEXT_BRIGHT),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        ]
        .spacing(8)
        .width(Length::FillPortion(1)),
    ]
    .spacing(16)
    .align_y(Alignment::End)
    .into()
}

fn view_height_section(state: &State) -> Element<'_, Message> {
    let form = &state.height_form;
    let unit = state.unit_system.unit_label();

    let fields: Element<'_, Message> = match form.input_mode {
        InputMode::Single => row![
            text_input(
                if state.unit_system == UnitSystem::Metric {
                    "e.g. 170"
                } else {
                    "e.g. 67"
                },
                &form.value
            )
            .on_input(Message::HeightChanged)
            .padding(8),
            text(unit).size(14).color(TEXT_DIM),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into(),
        InputMode::Dual => row![
            text_input("ft", &form.feet_input)
                .on_input(Message::FeetChanged)
                .padding(8),
            text("ft").size(14).color(TEXT_DIM),
            text_input(unit, &form.secondary_input)
                .on_input(Message::SecondaryChanged)
                .padding(8),
            text(unit).size(14).color(TEXT_DIM),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into(),
    };

    let mut section = column![section_label("HEIGHT"), fields].spacing(4);
    if let Some(err) = &form.error {
        section = section.push(text(err.as_str()).size(13).color(DANGER));
    }
    section.into()
}

fn view_profile_section(state: &State) -> Element<'_, Message> {
    let weight_unit = state.unit_system.weight_label();

    let mut weight_col = column![
        section_label("WEIGHT"),
        row![
            text_input("e.g. 70", &state.weight_input)
                .on_input(Message::WeightChanged)
                .padding(8),
            text(weight_unit).size(14).color(TEXT_DIM),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    ]
    .spacing(4);
    if let Some(err) = &state.form_errors.weight {
        weight_col = weight_col.push(text(err.as_str()).size(13).color(DANGER));
    }

    let mut age_col = column![
        section_label("AGE"),
        text_input("e.g. 30", &state.age_input)
            .on_input(Message::AgeChanged)
            .padding(8),
    ]
    .spacing(4);
    if let Some(err) = &state.form_errors.age {
        age_col = age_col.push(text(err.as_str()).size(13).color(DANGER));
    }

    column![
        row![
            weight_col.width(Length::FillPortion(1)),
            age_col.width(Length::FillPortion(1)),
        ]
        .spacing(16),
        row![
            column![
                section_label("SEX"),
                pick_list(
                    Sex::iter().collect::<Vec<_>>(),
                    Some(state.sex),
                    Message::SexSelected,
                )
                .padding(8)
                .width(Length::Fill),
            ]
            .spacing(4)
            .width(Length::FillPortion(1)),
            column![
                section_label("ACTIVITY"),
                pick_list(
                    ActivityLevel::iter().collect::<Vec<_>>(),
                    Some(state.activity),
                    Message::ActivitySelected,
                )
                .padding(8)
                .width(Length::Fill),
            ]
            .spacing(4)
            .width(Length::FillPortion(1)),
        ]
        .spacing(16),
    ]
    .spacing(12)
    .into()
}

fn view_results(state: &State) -> Element<'_, Message> {
    let Some(metrics) = &state.metrics else {
        let hint = if state.form_errors.is_empty() && !state.height_form.has_error() {
            "Enter a valid height, weight, and age to see your results."
        } else {
            "Fix the highlighted fields to see your results."
        };
        return text(hint).size(13).color(TEXT_DIM).into();
    };

    let plan = &metrics.meal_plan;
    container(
        column![
            result_row("BMI", format!("{:.1}  ({})", metrics.bmi, metrics.category)),
            result_row("BMR", format!("{:.0} kcal/day", metrics.bmr)),
            result_row(
                "Daily target",
                format!("{:.0} kcal/day", metrics.daily_calories),
            ),
            rule::horizontal(1),
            result_row("Breakfast", format!("{} kcal", plan.breakfast)),
            result_row("Lunch", format!("{} kcal", plan.lunch)),
            result_row("Dinner", format!("{} kcal", plan.dinner)),
            result_row("Snacks", format!("{} kcal", plan.snacks)),
        ]
        .spacing(8),
    )
    .padding(16)
    .width(Length::Fill)
    .style(card_container)
    .into()
}

fn result_row(label: &str, value: String) -> Element<'_, Message> {
    row![
        text(label.to_string()).size(14).color(TEXT_DIM).width(Length::Fill),
        text(value).size(14).color(TEXT_BRIGHT),
    ]
    .into()
}

fn section_label(label: &str) -> Element<'_, Message> {
    text(label.to_string()).size(11).color(TEXT_DIM).into()
}
