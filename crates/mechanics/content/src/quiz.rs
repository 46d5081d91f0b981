//! Single multiple-choice question with immediate feedback.

use std::time::Instant;

pub const TAG: &str = "Ciências • Ensino Médio";
pub const QUESTION: &str = "Qual destes elementos é um gás nobre?";
pub const OPTIONS: &[&str] = &["Oxigênio", "Hélio", "Ferro", "Cálcio"];
pub const CORRECT: usize = 1;

pub const EXPLANATION_CORRECT: &str =
    "Excelente! O Hélio (He) é um gás nobre por possuir sua camada de valência completa.";
pub const EXPLANATION_WRONG: &str =
    "Não foi dessa vez. O Oxigênio é um calcogênio, o Ferro um metal de transição e o Cálcio um metal alcalino-terroso.";

#[derive(Default)]
pub struct QuizBoard {
    selected: Option<usize>,
}

impl QuizBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// First answer wins; later clicks are ignored until retry.
    pub fn answer(&mut self, idx: usize) {
        if self.selected.is_none() && idx < OPTIONS.len() {
            self.selected = Some(idx);
        }
    }

    pub fn is_correct(&self) -> Option<bool> {
        self.selected.map(|idx| idx == CORRECT)
    }

    pub fn explanation(&self) -> Option<&'static str> {
        self.is_correct().map(|ok| if ok { EXPLANATION_CORRECT } else { EXPLANATION_WRONG })
    }

    pub fn tick(&mut self, _now: Instant) -> bool {
        false
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        None
    }

    pub fn reset(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_answer_is_final_until_reset() {
        let mut q = QuizBoard::new();
        q.answer(1);
        assert_eq!(q.is_correct(), Some(true));
        q.answer(2);
        assert_eq!(q.selected(), Some(1));

        q.reset();
        assert!(!q.is_answered());
        q.answer(2);
        assert_eq!(q.is_correct(), Some(false));
        assert_eq!(q.explanation(), Some(EXPLANATION_WRONG));
    }

    #[test]
    fn out_of_range_option_is_ignored() {
        let mut q = QuizBoard::new();
        q.answer(9);
        assert!(!q.is_answered());
    }
}
