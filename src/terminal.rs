//! Line-driven terminal frontend.
//!
//! Reads one command per line, applies it to the active questionnaire or the
//! controller, and prints whatever the controller's current view calls for.

use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::chart::TextRadialChart;
use crate::controller::{RootController, View};
use crate::prediction::Predictor;
use crate::quiz::{
    choice_label, choices, question, questions, AnswerVector, QuestionForm, MAX_ANSWER, MIN_ANSWER,
    UNANSWERED,
};
use crate::result_view::{render_importance, ResultView};

pub const APP_TITLE: &str = "Kişilik Analizi Uygulaması (Random Forest v2.0)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Answer the next unanswered question.
    Answer(u8),
    /// `<id>=<value>`: answer or change any question.
    Set { question_id: u32, value: u8 },
    Submit,
    List,
    Reset,
    Details,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "s" | "gönder" | "gonder" => return Command::Submit,
        "l" | "liste" => return Command::List,
        "r" | "yeni" => return Command::Reset,
        "d" | "detay" => return Command::Details,
        "h" | "?" | "yardım" | "yardim" => return Command::Help,
        "q" | "çık" | "cik" | "çıkış" => return Command::Quit,
        _ => {}
    }

    if let Ok(value) = line.parse::<u8>() {
        return Command::Answer(value);
    }

    let pair = line
        .split_once('=')
        .or_else(|| line.split_once(char::is_whitespace));
    if let Some((id, value)) = pair {
        if let (Ok(question_id), Ok(value)) = (id.trim().parse::<u32>(), value.trim().parse::<u8>()) {
            return Command::Set { question_id, value };
        }
    }

    Command::Unknown(line.to_string())
}

enum Flow {
    Continue,
    Quit,
}

pub struct TerminalApp<P, W> {
    controller: RootController<P>,
    form: QuestionForm<'static>,
    api_url: String,
    chart: TextRadialChart,
    out: W,
}

impl<P: Predictor, W: Write> TerminalApp<P, W> {
    pub fn new(controller: RootController<P>, api_url: impl Into<String>, out: W) -> Self {
        Self {
            controller,
            form: QuestionForm::new(questions()),
            api_url: api_url.into(),
            chart: TextRadialChart::default(),
            out,
        }
    }

    pub fn controller(&self) -> &RootController<P> {
        &self.controller
    }

    pub fn form(&self) -> &QuestionForm<'static> {
        &self.form
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub async fn run<R>(&mut self, mut input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        self.print_intro()?;
        self.print_view()?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            // consoles on legacy code pages send Latin-5 bytes
            let line = String::from_utf8_lossy(&buf);
            if line.trim().is_empty() {
                continue;
            }
            if let Flow::Quit = self.handle(parse_command(&line)).await? {
                break;
            }
        }

        info!("Terminal session finished");
        Ok(())
    }

    async fn handle(&mut self, command: Command) -> Result<Flow> {
        debug!("Command: {:?}", command);
        if command == Command::Quit {
            return Ok(Flow::Quit);
        }
        if command == Command::Help {
            self.print_help()?;
            return Ok(Flow::Continue);
        }

        let showing_result = matches!(self.controller.view(), View::Result(_));
        if showing_result {
            self.handle_result_command(command).await?;
        } else {
            self.handle_form_command(command).await?;
        }
        Ok(Flow::Continue)
    }

    async fn handle_form_command(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Answer(value) => match self.form.next_unanswered() {
                Some(question) => self.apply_answer(question.id, value)?,
                None => writeln!(self.out, "Tüm sorular cevaplandı. Göndermek için 's' yazın.")?,
            },
            Command::Set { question_id, value } => self.apply_answer(question_id, value)?,
            Command::List => self.print_form()?,
            Command::Submit => self.submit().await?,
            Command::Reset | Command::Details => {
                writeln!(self.out, "Bu komut yalnızca sonuç ekranında kullanılabilir.")?
            }
            Command::Unknown(text) => {
                writeln!(self.out, "Anlaşılamadı: '{}'. Yardım için 'h' yazın.", text)?
            }
            Command::Help | Command::Quit => {}
        }
        Ok(())
    }

    async fn handle_result_command(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Reset => {
                let mut requested = false;
                if let View::Result(result) = self.controller.view() {
                    ResultView::new(result).reset(|| requested = true);
                }
                if requested && self.controller.reset() {
                    self.form = QuestionForm::new(questions());
                    self.print_view()?;
                }
            }
            Command::Details => {
                let message = match self.controller.predictor().feature_importance().await {
                    Ok(importance) => render_importance(&importance),
                    Err(e) => format!("{} {}\n", "Hata:".red().bold(), e),
                };
                write!(self.out, "{}", message)?;
            }
            _ => writeln!(self.out, "Yeni test için 'r', çıkmak için 'q' yazın.")?,
        }
        Ok(())
    }

    fn apply_answer(&mut self, question_id: u32, value: u8) -> Result<()> {
        match self.form.set_answer(question_id, value) {
            Ok(()) => {
                if let Some(q) = question(question_id) {
                    writeln!(self.out, "  {}. {} -> {}", q.id, q.text, choice_label(value))?;
                }
            }
            Err(e) => writeln!(self.out, "{}", e.to_string().yellow())?,
        }
        self.print_prompt()
    }

    async fn submit(&mut self) -> Result<()> {
        let mut submitted: Option<AnswerVector> = None;
        if let Err(notice) = self.form.submit(|answers| submitted = Some(answers)) {
            writeln!(self.out, "{}", notice.to_string().yellow())?;
            return Ok(());
        }

        if let Some(answers) = submitted {
            self.print_loading()?;
            self.controller.submit(answers).await;
        }
        self.print_view()
    }

    fn print_loading(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "Random Forest modeli analiz yapıyor...".bold())?;
        writeln!(self.out, "Lütfen bekleyin, sonuçlarınız hazırlanıyor.")?;
        Ok(())
    }

    fn print_intro(&mut self) -> Result<()> {
        writeln!(self.out, "{}", APP_TITLE.bold())?;
        writeln!(self.out, "{}", "=".repeat(APP_TITLE.chars().count()))?;
        writeln!(
            self.out,
            "Bu test, beş temel kişilik özelliğinizi ölçerek kişilik tipinizi belirlemeye yardımcı olur."
        )?;
        writeln!(
            self.out,
            "Random Forest algoritması ile %88.7 doğruluk oranında tahmin yapar."
        )?;
        writeln!(self.out)?;
        self.print_help()
    }

    fn print_help(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "Her ifade için {} (kesinlikle katılmıyorum) ile {} (kesinlikle katılıyorum) arasında bir değer seçin.",
            MIN_ANSWER, MAX_ANSWER
        )?;
        for choice in choices().iter().filter(|c| c.enabled) {
            writeln!(self.out, "  {}", choice.label)?;
        }
        writeln!(
            self.out,
            "Komutlar: 1-5 sıradaki soru | <no>=<değer> soruyu değiştir | l liste | s gönder | r yeni test | d detay | q çıkış"
        )?;
        Ok(())
    }

    fn print_view(&mut self) -> Result<()> {
        match self.controller.view() {
            View::Loading => self.print_loading()?,
            View::Result(result) => {
                let text = ResultView::new(result).render(&self.chart);
                write!(self.out, "{}", text)?;
            }
            View::Form { error } => {
                if let Some(message) = error {
                    writeln!(self.out, "{} {}", "Hata:".red().bold(), message)?;
                    writeln!(
                        self.out,
                        "API Durumu: {} - Lütfen backend sunucusunun çalıştığından emin olun.",
                        self.api_url
                    )?;
                }
                self.print_prompt()?;
            }
        }
        Ok(())
    }

    fn print_prompt(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "Cevaplanan sorular: {} / {}",
            self.form.answered_count(),
            self.form.total()
        )?;
        match self.form.next_unanswered() {
            Some(question) => writeln!(
                self.out,
                "[{}] {}. {} (1-5)",
                question.category.short_label(),
                question.id,
                question.text
            )?,
            None => writeln!(self.out, "{}", "Analizi Tamamla: 's' yazın.".green())?,
        }
        Ok(())
    }

    fn print_form(&mut self) -> Result<()> {
        for section in self.form.sections() {
            writeln!(
                self.out,
                "{} ({} soru)",
                section.title().bold(),
                section.questions.len()
            )?;
            for question in section.questions {
                let answer = self.form.answer(question.id).unwrap_or(UNANSWERED);
                writeln!(
                    self.out,
                    "  {}. {} [{}]",
                    question.id,
                    question.text,
                    choice_label(answer)
                )?;
            }
        }
        self.print_prompt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command(" 3 "), Command::Answer(3));
        assert_eq!(parse_command("12=4"), Command::Set { question_id: 12, value: 4 });
        assert_eq!(parse_command("12 4"), Command::Set { question_id: 12, value: 4 });
        assert_eq!(parse_command("S"), Command::Submit);
        assert_eq!(parse_command("gönder"), Command::Submit);
        assert_eq!(parse_command("r"), Command::Reset);
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("x=y"), Command::Unknown("x=y".to_string()));
    }

    #[test]
    fn out_of_range_numbers_still_parse() {
        // validation belongs to the form
        assert_eq!(parse_command("9"), Command::Answer(9));
        assert_eq!(parse_command("0"), Command::Answer(0));
        assert_eq!(parse_command("60=2"), Command::Set { question_id: 60, value: 2 });
    }
}
