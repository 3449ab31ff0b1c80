//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Login gate, then a main menu over the assessment form, guides, MatriBot
//! chat and report download.

use crate::adapters::ui::progress::spinner;
use crate::domain::guides::{
    self, EMERGENCY_CONTACTS, EXERCISE_FOOTER, FOOD_FOOTER, HEALTH_TIPS, PREGNANCY_CARE,
};
use crate::domain::{AssessmentForm, ChatMessage, DomainError, HealthRecord, RiskLabel, Sender};
use crate::ports::InputPort;
use crate::usecases::{AssessmentService, AuthService, ChatService, ReportService};
use async_trait::async_trait;
use chrono::Local;
use crossterm::style::Stylize;
use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
use inquire::{Confirm, InquireError, Password, PasswordDisplayMode, Select, Text};
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// Purple/pink theme for every inquire prompt. Call once at startup.
pub fn apply_theme() {
    let purple = Color::Rgb {
        r: 0x7e,
        g: 0x22,
        b: 0xce,
    };
    let pink = Color::Rgb {
        r: 0xdb,
        g: 0x27,
        b: 0x77,
    };
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("💜").with_fg(purple))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(pink))
        .with_selected_option(Some(StyleSheet::new().with_fg(pink)))
        .with_answer(StyleSheet::new().with_fg(purple));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    HealthRisk,
    FoodGuide,
    ExerciseGuide,
    Chat,
    DownloadReport,
    TipsAndContacts,
    Exit,
}

impl MenuItem {
    const ALL: [MenuItem; 7] = [
        MenuItem::HealthRisk,
        MenuItem::FoodGuide,
        MenuItem::ExerciseGuide,
        MenuItem::Chat,
        MenuItem::DownloadReport,
        MenuItem::TipsAndContacts,
        MenuItem::Exit,
    ];
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuItem::HealthRisk => "🩺 Health Risk Assessment",
            MenuItem::FoodGuide => "🥗 Food Guide",
            MenuItem::ExerciseGuide => "🏃 Exercise Guide",
            MenuItem::Chat => "🤖 Chat with MatriBot",
            MenuItem::DownloadReport => "📄 Download Report",
            MenuItem::TipsAndContacts => "💡 Health Tips & Emergency Contacts",
            MenuItem::Exit => "🚪 Exit",
        };
        f.write_str(label)
    }
}

/// Risk level picker entry for the guide pages.
#[derive(Debug, Clone, Copy)]
struct LevelChoice {
    level: RiskLabel,
    icon: &'static str,
}

impl fmt::Display for LevelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.level {
            RiskLabel::Low => "Low",
            RiskLabel::Medium => "Mid",
            RiskLabel::High => "High",
        };
        write!(f, "{} {} Risk", self.icon, name)
    }
}

const TYPE_QUESTION: &str = "✎ Type a question";
const CLOSE_CHAT: &str = "✖ Close chat";
const SHOW_PRECAUTIONS: &str = "⚠ Important Precautions";
const BACK: &str = "← Back";

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    auth: Arc<AuthService>,
    assessment: Arc<AssessmentService>,
    chat: Arc<ChatService>,
    reports: Arc<ReportService>,
}

impl TuiInputPort {
    pub fn new(
        auth: Arc<AuthService>,
        assessment: Arc<AssessmentService>,
        chat: Arc<ChatService>,
        reports: Arc<ReportService>,
    ) -> Self {
        Self {
            auth,
            assessment,
            chat,
            reports,
        }
    }

    /// Returns false when the user backs out of the login prompts.
    async fn login(&self) -> Result<bool, DomainError> {
        println!("{}", "Login to MatriSense+".magenta().bold());
        while !self.auth.is_authenticated() {
            let Some(email) = cancelable(Text::new("Email:").prompt())? else {
                return Ok(false);
            };
            let Some(password) = cancelable(
                Password::new("Password:")
                    .without_confirmation()
                    .with_display_mode(PasswordDisplayMode::Masked)
                    .prompt(),
            )?
            else {
                return Ok(false);
            };

            if let Err(e) = self.auth.login(&email, &password).await {
                println!("{}", e.to_string().red());
                if self.auth.attempts_left() == 0 {
                    return Err(e);
                }
            }
        }
        Ok(true)
    }

    async fn health_risk(&self) -> Result<(), DomainError> {
        println!();
        println!("{}", "Maternal Health Risk Assessment".magenta().bold());
        println!("Monitor your pregnancy health with our comprehensive risk assessment tool.\n");

        let mut form = AssessmentForm::default();
        loop {
            form = match cancelable(read_form(&form))? {
                Some(next) => next,
                None => return Ok(()),
            };
            match self.assessment.assess(&form).await {
                Ok(record) => {
                    print_result(&record);
                    let export = cancelable(
                        Confirm::new("Download your health report now?")
                            .with_default(true)
                            .prompt(),
                    )?
                    .unwrap_or(false);
                    if export {
                        self.export(&record).await?;
                    }
                    return Ok(());
                }
                Err(DomainError::Validation(e)) => {
                    println!("{}", e.to_string().red());
                    let again = cancelable(
                        Confirm::new("Edit your answers and try again?")
                            .with_default(true)
                            .prompt(),
                    )?
                    .unwrap_or(false);
                    if !again {
                        return Ok(());
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn food_guide(&self) -> Result<(), DomainError> {
        let Some(level) = self
            .pick_level("Pregnancy Nutrition Guide", |l| guides::food_guide(l).icon)
            .await?
        else {
            return Ok(());
        };
        let guide = guides::food_guide(level);
        println!();
        println!("{} {}", guide.icon, guide.title.magenta().bold());
        println!("{}\n", guide.description.italic());
        for (i, tip) in guide.tips.iter().enumerate() {
            println!("  {:>2}. {}", i + 1, tip);
        }
        println!("\n{}\n", FOOD_FOOTER.dark_grey());
        Ok(())
    }

    async fn exercise_guide(&self) -> Result<(), DomainError> {
        let Some(level) = self
            .pick_level("Pregnancy Exercise Guide", |l| guides::exercise_guide(l).icon)
            .await?
        else {
            return Ok(());
        };
        let guide = guides::exercise_guide(level);
        println!();
        println!("{} {}", guide.icon, guide.title.magenta().bold());
        println!("{}", guide.description.italic());
        println!(
            "Duration: {}   Intensity: {}\n",
            guide.duration.cyan(),
            guide.intensity.cyan()
        );

        let mut options: Vec<String> = guide
            .tips
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{}. {}", i + 1, t.text))
            .collect();
        options.push(SHOW_PRECAUTIONS.to_string());
        options.push(BACK.to_string());

        loop {
            let Some(choice) = cancelable(
                Select::new("Recommended Activities (select to expand):", options.clone()).prompt(),
            )?
            else {
                break;
            };
            if choice == BACK {
                break;
            }
            if choice == SHOW_PRECAUTIONS {
                for p in guide.precautions {
                    println!("  {} {}", "⚠".yellow(), p);
                }
                continue;
            }
            if let Some(idx) = options.iter().position(|o| *o == choice) {
                if let Some(tip) = guide.tips.get(idx) {
                    println!("    ↳ {}", tip.detail.italic());
                }
            }
        }
        println!("{}\n", EXERCISE_FOOTER.dark_grey());
        Ok(())
    }

    /// Ask for a risk level, starting at the latest assessment's level when known.
    async fn pick_level(
        &self,
        heading: &str,
        icon: fn(RiskLabel) -> &'static str,
    ) -> Result<Option<RiskLabel>, DomainError> {
        println!();
        println!("{}", heading.magenta().bold());
        let latest = self.assessment.latest().await?.map(|r| r.risk);
        let cursor = latest
            .and_then(|l| RiskLabel::ALL.iter().position(|x| *x == l))
            .unwrap_or(0);
        let picked = cancelable(
            Select::new("Select your pregnancy risk level:", level_choices(icon))
                .with_starting_cursor(cursor)
                .prompt(),
        )?;
        Ok(picked.map(|c| c.level))
    }

    async fn chat(&self) -> Result<(), DomainError> {
        println!();
        println!("{}", "MatriBot Assistant".magenta().bold());
        println!(
            "{}",
            "Try: \"food tips\", \"exercise advice\", or \"health concerns\"".dark_grey()
        );
        for msg in self.chat.history().await {
            print_message(&msg);
        }

        loop {
            let history = self.chat.history().await;
            let mut options: Vec<String> = history
                .iter()
                .rev()
                .find(|m| m.sender == Sender::Bot)
                .map(|m| m.options.clone())
                .unwrap_or_default();
            options.push(TYPE_QUESTION.to_string());
            options.push(CLOSE_CHAT.to_string());

            let Some(picked) = cancelable(Select::new("Reply:", options).prompt())? else {
                break;
            };

            if picked == CLOSE_CHAT {
                break;
            }
            // Quick replies are resubmitted verbatim as the next input.
            let input = if picked == TYPE_QUESTION {
                // Esc leaves the typed question and goes back to the replies.
                match cancelable(
                    Text::new("You:")
                        .with_placeholder("Type your question...")
                        .prompt(),
                )? {
                    Some(text) => text,
                    None => continue,
                }
            } else {
                picked
            };

            let pb = (!self.chat.reply_delay().is_zero()).then(|| spinner("MatriBot is typing..."));
            let reply = self.chat.send(&input).await;
            if let Some(pb) = pb {
                pb.finish_and_clear();
            }
            match reply {
                Some(msg) => {
                    print_message(&ChatMessage::user(input.trim()));
                    print_message(&msg);
                }
                None => println!("{}", "Please type a question first.".dark_grey()),
            }
        }
        Ok(())
    }

    async fn download_report(&self) -> Result<(), DomainError> {
        match self.assessment.latest().await? {
            Some(record) => self.export(&record).await,
            None => {
                println!(
                    "{}",
                    "Please assess your risk first to enable report download.".yellow()
                );
                Ok(())
            }
        }
    }

    async fn export(&self, record: &HealthRecord) -> Result<(), DomainError> {
        let pb = spinner("Generating report...");
        let result = self.reports.export(record).await;
        pb.finish_and_clear();
        match result {
            Ok(path) => {
                println!("{} {}", "📄 Report saved to".green(), path.display());
                println!(
                    "{}",
                    format!(
                        "Last updated: {}",
                        record
                            .assessed_at
                            .with_timezone(&Local)
                            .format("%Y-%m-%d %H:%M")
                    )
                    .dark_grey()
                );
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "report export failed");
                println!("{}", e.to_string().red());
                Ok(())
            }
        }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        if !self.login().await? {
            info!("login abandoned");
            println!("Take care! 💜");
            return Ok(());
        }
        println!("\n{}", "Welcome to MatriSense+".magenta().bold());

        loop {
            let item = match Select::new("What would you like to do?", MenuItem::ALL.to_vec())
                .with_page_size(MenuItem::ALL.len())
                .prompt()
            {
                Ok(item) => item,
                Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                    MenuItem::Exit
                }
                Err(e) => return Err(ui_err(e)),
            };

            match item {
                MenuItem::HealthRisk => self.health_risk().await?,
                MenuItem::FoodGuide => self.food_guide().await?,
                MenuItem::ExerciseGuide => self.exercise_guide().await?,
                MenuItem::Chat => self.chat().await?,
                MenuItem::DownloadReport => self.download_report().await?,
                MenuItem::TipsAndContacts => print_tips_and_contacts(),
                MenuItem::Exit => {
                    self.auth.logout();
                    info!("session closed");
                    println!("Take care! 💜");
                    return Ok(());
                }
            }
        }
    }
}

fn ui_err(e: InquireError) -> DomainError {
    DomainError::Ui(e.to_string())
}

/// Esc yields `None` so the caller can step back; other prompt failures are errors.
fn cancelable<T>(answer: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match answer {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(e) => Err(ui_err(e)),
    }
}

fn level_choices(icon: fn(RiskLabel) -> &'static str) -> Vec<LevelChoice> {
    RiskLabel::ALL
        .iter()
        .map(|&level| LevelChoice {
            level,
            icon: icon(level),
        })
        .collect()
}

/// Seven text prompts, prefilled with the previous answers.
fn read_form(prev: &AssessmentForm) -> Result<AssessmentForm, InquireError> {
    let ask = |label: &str, placeholder: &str, previous: &str| {
        Text::new(label)
            .with_placeholder(placeholder)
            .with_initial_value(previous)
            .prompt()
    };
    Ok(AssessmentForm {
        name: ask("Full Name:", "e.g., Vandana", &prev.name)?,
        age: ask("Age (years):", "30", &prev.age)?,
        systolic_bp: ask("Systolic BP (mmHg):", "e.g., 110", &prev.systolic_bp)?,
        diastolic_bp: ask("Diastolic BP (mmHg):", "e.g., 70", &prev.diastolic_bp)?,
        blood_sugar: ask("Blood Sugar (mg/dL):", "e.g., 90", &prev.blood_sugar)?,
        body_temp: ask("Body Temp (°F):", "e.g., 98.6", &prev.body_temp)?,
        heart_rate: ask("Heart Rate (bpm):", "e.g., 80", &prev.heart_rate)?,
    })
}

fn print_result(record: &HealthRecord) {
    println!();
    let headline = record.risk.headline();
    let styled = match record.risk {
        RiskLabel::Low => headline.green().bold(),
        RiskLabel::Medium => headline.yellow().bold(),
        RiskLabel::High => headline.red().bold(),
    };
    println!("{}", styled);
    println!("{}\n", record.risk.advice().italic());
}

fn print_message(msg: &ChatMessage) {
    match msg.sender {
        Sender::User => println!("{} {}", "You:".cyan().bold(), msg.text),
        Sender::Bot => {
            println!("{} {}", "🤖 MatriBot:".magenta().bold(), msg.text);
            for d in &msg.details {
                println!("    • {}", d);
            }
        }
    }
}

fn print_tips_and_contacts() {
    println!();
    println!("{}", "Pregnancy Health Tips".magenta().bold());
    for item in PREGNANCY_CARE {
        println!("  • {}", item);
    }
    println!();
    println!("{}", "Daily Health Tips".magenta().bold());
    for tip in HEALTH_TIPS {
        println!("  {}", tip);
    }
    println!();
    println!("{}", "Emergency Contacts".red().bold());
    for c in EMERGENCY_CONTACTS {
        println!("  {:<28} {}", c.name, c.number.red());
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_has_exit_last() {
        assert_eq!(MenuItem::ALL.last(), Some(&MenuItem::Exit));
    }

    #[test]
    fn test_level_choice_labels() {
        let c = LevelChoice {
            level: RiskLabel::Medium,
            icon: "🥑",
        };
        assert_eq!(c.to_string(), "🥑 Mid Risk");
    }

    #[test]
    fn test_exercise_picker_uses_exercise_icons() {
        let choices = level_choices(|l| guides::exercise_guide(l).icon);
        let icons: Vec<&str> = choices.iter().map(|c| c.icon).collect();
        assert_eq!(icons, ["🚶‍♀️", "🧘‍♀️", "🛌"]);
        assert_eq!(level_choices(|l| guides::food_guide(l).icon)[2].icon, "🏥");
    }

    #[test]
    fn test_escape_steps_back() {
        let answer: Result<String, InquireError> = Err(InquireError::OperationCanceled);
        assert!(matches!(cancelable(answer), Ok(None)));

        let answer = Ok("yes".to_string());
        assert_eq!(cancelable(answer).unwrap().as_deref(), Some("yes"));
    }

    #[test]
    fn test_real_prompt_failure_is_an_error() {
        let answer: Result<bool, InquireError> = Err(InquireError::NotTTY);
        assert!(matches!(cancelable(answer), Err(DomainError::Ui(_))));
    }
}
