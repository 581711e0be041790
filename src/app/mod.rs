//! GUI application state and event handling
//!
//! One synchronous recomputation per keystroke: every accepted message
//! revalidates the touched field and refreshes the derived metrics from
//! scratch. Nothing is cached between updates beyond the form strings
//! themselves.

pub mod forms;
pub mod view;

use crate::core::height::{self, InputMode, UnitSystem};
use crate::core::metrics::{ActivityLevel, BodyMetrics, CM_PER_INCH, KG_PER_POUND, Sex};
use crate::validators;
use forms::{FormErrors, HeightForm};
use iced::{Element, Task};

pub struct State {
    pub unit_system: UnitSystem,
    pub height_form: HeightForm,
    pub weight_input: String,
    pub age_input: String,
    pub sex: Sex,
    pub activity: ActivityLevel,
    pub form_errors: FormErrors,
    pub metrics: Option<BodyMetrics>,
}

#[derive(Debug, Clone)]
pub enum Message {
    UnitSystemSelected(UnitSystem),
    InputModeToggled(bool),
    HeightChanged(String),
    FeetChanged(String),
    SecondaryChanged(String),
    WeightChanged(String),
    AgeChanged(String),
    SexSelected(Sex),
    ActivitySelected(ActivityLevel),
}

impl State {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                unit_system: UnitSystem::Metric,
                height_form: HeightForm::default(),
                weight_input: String::new(),
                age_input: String::new(),
                sex: Sex::default(),
                activity: ActivityLevel::default(),
                form_errors: FormErrors::default(),
                metrics: None,
            },
            Task::none(),
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::UnitSystemSelected(unit_system) => {
                self.handle_unit_system_selected(unit_system);
            }
            Message::InputModeToggled(dual) => {
                let mode = if dual { InputMode::Dual } else { InputMode::Single };
                self.height_form.switch_mode(mode, self.unit_system);
            }
            Message::HeightChanged(s) => self.height_form.apply_single_input(s),
            Message::FeetChanged(s) => {
                self.height_form.feet_input = s;
                self.height_form.apply_dual_input(self.unit_system);
            }
            Message::SecondaryChanged(s) => {
                self.height_form.secondary_input = s;
                self.height_form.apply_dual_input(self.unit_system);
            }
            Message::WeightChanged(s) => {
                self.form_errors.weight = if s.trim().is_empty() {
                    None
                } else {
                    validators::validate_weight(&s).err()
                };
                self.weight_input = s;
            }
            Message::AgeChanged(s) => {
                self.form_errors.age = if s.trim().is_empty() {
                    None
                } else {
                    validators::validate_age(&s).err()
                };
                self.age_input = s;
            }
            Message::SexSelected(sex) => self.sex = sex,
            Message::ActivitySelected(activity) => self.activity = activity,
        }

        self.refresh_metrics();
        Task::none()
    }

    /// Switches the unit system, converting the canonical value so the
    /// physical height is preserved (its semantics change with the system).
    fn handle_unit_system_selected(&mut self, unit_system: UnitSystem) {
        if unit_system == self.unit_system {
            return;
        }

        if let Ok(v) = validators::validate_height(&self.height_form.value) {
            let converted = match unit_system {
                UnitSystem::Metric => v * CM_PER_INCH,
                UnitSystem::Imperial => v / CM_PER_INCH,
            };
            self.height_form.value = height::format_height(converted.round());
        }
        self.unit_system = unit_system;

        if self.height_form.input_mode == InputMode::Dual {
            self.height_form.sync_dual_fields(unit_system);
        }
    }

    /// Recomputes the derived metrics from the current inputs.
    ///
    /// Pure function of the form state: any invalid or missing input clears
    /// the results instead of showing stale ones.
    fn refresh_metrics(&mut self) {
        self.metrics = self.compute_metrics();
        tracing::debug!(
            unit_system = %self.unit_system,
            height = %self.height_form.value,
            has_metrics = self.metrics.is_some(),
            "recomputed derived metrics"
        );
    }

    fn compute_metrics(&self) -> Option<BodyMetrics> {
        if self.height_form.has_error() {
            return None;
        }
        let height = self.height_form.validated_value()?;
        let weight = validators::validate_weight(&self.weight_input).ok()?;
        let age = validators::validate_age(&self.age_input).ok()?;

        let (height_cm, weight_kg) = match self.unit_system {
            UnitSystem::Metric => (height, weight),
            UnitSystem::Imperial => (height * CM_PER_INCH, weight * KG_PER_POUND),
        };
        BodyMetrics::compute(self.sex, self.activity, weight_kg, height_cm, age)
    }
}
