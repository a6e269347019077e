use colored::Colorize;

use crate::cli::{output, prompts::Prompter, view::TerminalFormView, CommandError};
use crate::form::{CancelChoice, Field, FormEvent, FormOutcome, CANCEL_PROMPT};
use crate::list::{EditTarget, MealList};
use crate::storage::MealStore;
use crate::time::{Clock, CreationTimeFormatter};

pub const MAIN_MENU_PROMPT: &str = "Food Tracker";
pub const FORM_MENU_PROMPT: &str = "Meal form";
pub const PICK_MEAL_PROMPT: &str = "Which meal?";
pub const NAME_PROMPT: &str = "Meal name";
pub const CREATION_TIME_PROMPT: &str = "Creation time";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    List,
    Add,
    Edit,
    Delete,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 5] = [
        MenuItem::List,
        MenuItem::Add,
        MenuItem::Edit,
        MenuItem::Delete,
        MenuItem::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuItem::List => "List meals",
            MenuItem::Add => "Add meal",
            MenuItem::Edit => "Edit meal",
            MenuItem::Delete => "Delete meal",
            MenuItem::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormAction {
    Save,
    EditAgain,
    Cancel,
}

impl FormAction {
    fn label(self) -> &'static str {
        match self {
            FormAction::Save => "Save",
            FormAction::EditAgain => "Edit again",
            FormAction::Cancel => "Cancel",
        }
    }
}

/// Everything the shell needs besides the meal list itself.
pub struct ShellContext<'a> {
    pub prompter: &'a mut dyn Prompter,
    pub clock: &'a dyn Clock,
    pub formatter: &'a CreationTimeFormatter,
}

/// Runs the main menu until the user quits.
pub fn run_shell<S: MealStore>(
    list: &mut MealList<S>,
    context: &mut ShellContext<'_>,
) -> Result<(), CommandError> {
    let labels: Vec<&str> = MenuItem::ALL.iter().map(|item| item.label()).collect();
    loop {
        let choice = context.prompter.select(MAIN_MENU_PROMPT, &labels)?;
        match MenuItem::ALL.get(choice).copied().unwrap_or(MenuItem::Quit) {
            MenuItem::List => print_meals(list),
            MenuItem::Add => {
                run_form_session(list, EditTarget::New, context)?;
            }
            MenuItem::Edit => {
                if let Some(index) = pick_meal(list, context.prompter)? {
                    run_form_session(list, EditTarget::Existing(index), context)?;
                }
            }
            MenuItem::Delete => {
                if let Some(index) = pick_meal(list, context.prompter)? {
                    delete_meal(list, index, context.prompter)?;
                }
            }
            MenuItem::Quit => {
                output::info("Goodbye.");
                return Ok(());
            }
        }
    }
}

/// Prints the collection as a numbered list.
pub fn print_meals<S: MealStore>(list: &MealList<S>) {
    if list.is_empty() {
        output::info("No meals recorded yet.");
        return;
    }
    output::section("Meals");
    for (index, meal) in list.meals().iter().enumerate() {
        println!(
            "{:>3}. {}  {}",
            index + 1,
            meal.name().bold(),
            meal.creation_time().dimmed()
        );
    }
}

/// Walks one meal form from load to outcome and folds the outcome into `list`.
///
/// Returns the position of the saved meal, or `None` when the edit was discarded.
pub fn run_form_session<S: MealStore>(
    list: &mut MealList<S>,
    target: EditTarget,
    context: &mut ShellContext<'_>,
) -> Result<Option<usize>, CommandError> {
    let mut form = list.open_editor(target, TerminalFormView::new())?;
    output::section(match target {
        EditTarget::New => "New Meal",
        EditTarget::Existing(_) => "Edit Meal",
    });
    form.load(context.clock, context.formatter)?;

    let outcome = loop {
        form.handle(FormEvent::EditingBegan(Field::Name))?;
        let name = context.prompter.text(NAME_PROMPT, form.name_text())?;
        form.handle(FormEvent::NameEdited(name))?;
        form.handle(FormEvent::EditingEnded(Field::Name))?;

        form.handle(FormEvent::EditingBegan(Field::CreationTime))?;
        let created = context
            .prompter
            .text(CREATION_TIME_PROMPT, form.creation_time_text())?;
        form.handle(FormEvent::CreationTimeEdited(created))?;
        form.handle(FormEvent::EditingEnded(Field::CreationTime))?;

        let mut actions = Vec::with_capacity(3);
        if form.view().save_enabled() {
            actions.push(FormAction::Save);
        } else {
            output::warning("A meal needs a name before it can be saved.");
        }
        actions.push(FormAction::EditAgain);
        actions.push(FormAction::Cancel);
        let labels: Vec<&str> = actions.iter().map(|action| action.label()).collect();

        let choice = context.prompter.select(FORM_MENU_PROMPT, &labels)?;
        match actions.get(choice).copied().unwrap_or(FormAction::EditAgain) {
            FormAction::Save => {
                if let Some(outcome) = form.handle(FormEvent::SaveTapped)? {
                    break outcome;
                }
            }
            FormAction::EditAgain => {}
            FormAction::Cancel => {
                form.handle(FormEvent::CancelTapped)?;
                let prompt = form.view_mut().take_prompt().unwrap_or(CANCEL_PROMPT);
                let answer = if context.prompter.confirm(prompt.title)? {
                    CancelChoice::Yes
                } else {
                    CancelChoice::No
                };
                if let Some(outcome) = form.handle(FormEvent::CancelAnswered(answer))? {
                    break outcome;
                }
            }
        }
    };

    let saved_name = match &outcome {
        FormOutcome::Saved(meal) => Some(meal.name().to_string()),
        FormOutcome::Dismissed(_) => None,
    };
    let position = list.apply(target, outcome)?;
    match saved_name {
        Some(name) => output::success(format!("Saved meal \"{name}\".")),
        None => output::info("Edit discarded."),
    }
    Ok(position)
}

fn pick_meal<S: MealStore>(
    list: &MealList<S>,
    prompter: &mut dyn Prompter,
) -> Result<Option<usize>, CommandError> {
    if list.is_empty() {
        output::info("No meals recorded yet.");
        return Ok(None);
    }
    let labels: Vec<&str> = list.meals().iter().map(|meal| meal.name()).collect();
    prompter.select(PICK_MEAL_PROMPT, &labels).map(Some)
}

fn delete_meal<S: MealStore>(
    list: &mut MealList<S>,
    index: usize,
    prompter: &mut dyn Prompter,
) -> Result<(), CommandError> {
    let Some(meal) = list.get(index) else {
        return Ok(());
    };
    let question = format!("Delete \"{}\"?", meal.name());
    if prompter.confirm(&question)? {
        let removed = list.remove(index)?;
        output::success(format!("Deleted meal \"{}\".", removed.name()));
    }
    Ok(())
}
