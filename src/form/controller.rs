use thiserror::Error;

use super::view::{FormView, CANCEL_PROMPT};
use crate::domain::Meal;
use crate::time::{Clock, CreationTimeFormatter};

/// Lifecycle of one editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Editing,
    Cancelling,
    Confirmed,
    Dismissed,
}

impl FormState {
    pub fn is_terminal(self) -> bool {
        matches!(self, FormState::Confirmed | FormState::Dismissed)
    }
}

/// Editable text fields on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    CreationTime,
}

/// Answer to the cancel confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelChoice {
    No,
    Yes,
}

/// How the form was shown, which decides how it is taken down again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Presented modally for a new meal.
    Modal,
    /// Pushed onto a navigation stack to edit an existing meal.
    Pushed,
    /// Not hosted by any container.
    Detached,
}

/// What the host must do to take the form down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    Dismiss,
    Pop,
}

/// Input delivered by the hosting UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    NameEdited(String),
    CreationTimeEdited(String),
    EditingBegan(Field),
    EditingEnded(Field),
    ReturnPressed(Field),
    SaveTapped,
    CancelTapped,
    CancelAnswered(CancelChoice),
}

/// Result of a finished session, handed to the list collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Saved(Meal),
    Dismissed(Dismissal),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("event {event:?} is not accepted while the form is {state:?}")]
    UnexpectedEvent { state: FormState, event: FormEvent },
    #[error("the meal form was already loaded and is {0:?}")]
    AlreadyLoaded(FormState),
    #[error("cannot dismiss the meal form: it is not hosted in a presentation container")]
    NotHosted,
}

/// Presentation adapter binding two text fields to an optional source meal.
pub struct FormController<V: FormView> {
    view: V,
    source: Option<Meal>,
    presentation: Presentation,
    state: FormState,
    name: String,
    creation_time: String,
    title: Option<String>,
    save_enabled: bool,
    focused: Option<Field>,
}

impl<V: FormView> FormController<V> {
    /// Creates an idle form. `source` is the meal being edited, if any.
    pub fn new(source: Option<Meal>, presentation: Presentation, view: V) -> Self {
        Self {
            view,
            source,
            presentation,
            state: FormState::Idle,
            name: String::new(),
            creation_time: String::new(),
            title: None,
            save_enabled: false,
            focused: None,
        }
    }

    /// Populates the fields and moves to `Editing`.
    ///
    /// The clock is read only when there is no source meal.
    pub fn load(
        &mut self,
        clock: &dyn Clock,
        formatter: &CreationTimeFormatter,
    ) -> Result<(), FormError> {
        if self.state != FormState::Idle {
            return Err(FormError::AlreadyLoaded(self.state));
        }

        match &self.source {
            Some(meal) => {
                self.name = meal.name().to_string();
                self.creation_time = meal.creation_time().to_string();
                self.title = Some(meal.name().to_string());
            }
            None => {
                self.name.clear();
                self.creation_time = formatter.format(clock.now());
            }
        }

        self.view.show_fields(&self.name, &self.creation_time);
        if let Some(title) = &self.title {
            self.view.set_title(title);
        }
        self.save_enabled = !self.name.is_empty();
        self.view.set_save_enabled(self.save_enabled);

        self.state = FormState::Editing;
        tracing::debug!(editing = self.source.is_some(), "Meal form loaded.");
        Ok(())
    }

    /// Applies one UI event. Returns an outcome once the session finishes.
    pub fn handle(&mut self, event: FormEvent) -> Result<Option<FormOutcome>, FormError> {
        match (self.state, event) {
            (FormState::Editing, FormEvent::NameEdited(text)) => {
                self.name = text;
                self.refresh_save_state();
                Ok(None)
            }
            (FormState::Editing, FormEvent::CreationTimeEdited(text)) => {
                self.creation_time = text;
                Ok(None)
            }
            (FormState::Editing, FormEvent::EditingBegan(field)) => {
                self.focused = Some(field);
                if field == Field::Name {
                    self.set_save_enabled(false);
                }
                Ok(None)
            }
            (FormState::Editing, FormEvent::EditingEnded(field)) => {
                self.end_editing(field);
                Ok(None)
            }
            (FormState::Editing, FormEvent::ReturnPressed(field)) => {
                if self.focused == Some(field) {
                    self.end_editing(field);
                }
                Ok(None)
            }
            (FormState::Editing, FormEvent::SaveTapped) => Ok(self.save()),
            (FormState::Editing, FormEvent::CancelTapped) => {
                self.state = FormState::Cancelling;
                self.view.present_cancel_prompt(&CANCEL_PROMPT);
                Ok(None)
            }
            (FormState::Cancelling, FormEvent::CancelAnswered(CancelChoice::No)) => {
                self.state = FormState::Editing;
                Ok(None)
            }
            (FormState::Cancelling, FormEvent::CancelAnswered(CancelChoice::Yes)) => {
                self.discard().map(Some)
            }
            (state, event) => Err(FormError::UnexpectedEvent { state, event }),
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn name_text(&self) -> &str {
        &self.name
    }

    pub fn creation_time_text(&self) -> &str {
        &self.creation_time
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn is_save_enabled(&self) -> bool {
        self.save_enabled
    }

    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    pub fn source(&self) -> Option<&Meal> {
        self.source.as_ref()
    }

    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    fn end_editing(&mut self, field: Field) {
        if self.focused == Some(field) {
            self.focused = None;
        }
        if field == Field::Name {
            self.refresh_save_state();
            self.title = Some(self.name.clone());
            self.view.set_title(&self.name);
        }
    }

    fn refresh_save_state(&mut self) {
        self.set_save_enabled(!self.name.is_empty());
    }

    fn set_save_enabled(&mut self, enabled: bool) {
        if self.save_enabled != enabled {
            self.save_enabled = enabled;
            self.view.set_save_enabled(enabled);
        }
    }

    fn save(&mut self) -> Option<FormOutcome> {
        if !self.save_enabled {
            tracing::debug!("Save ignored while the save control is disabled.");
            return None;
        }
        match Meal::new(self.name.clone(), self.creation_time.clone()) {
            Ok(meal) => {
                self.state = FormState::Confirmed;
                self.focused = None;
                tracing::debug!(meal = %meal.name(), "Meal form confirmed.");
                Some(FormOutcome::Saved(meal))
            }
            Err(err) => {
                tracing::debug!(error = %err, "Meal form not saved.");
                None
            }
        }
    }

    fn discard(&mut self) -> Result<FormOutcome, FormError> {
        let dismissal = match self.presentation {
            Presentation::Modal => Dismissal::Dismiss,
            Presentation::Pushed => Dismissal::Pop,
            Presentation::Detached => {
                tracing::error!("Meal form dismissed outside of a presentation container.");
                return Err(FormError::NotHosted);
            }
        };
        self.name.clear();
        self.creation_time.clear();
        self.focused = None;
        self.state = FormState::Dismissed;
        tracing::debug!(?dismissal, "Meal form edit discarded.");
        Ok(FormOutcome::Dismissed(dismissal))
    }
}
