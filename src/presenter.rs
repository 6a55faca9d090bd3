//! Presentation layer abstraction and the terminal implementation

use crate::formatters::{format_product_details, format_product_list};
use crate::models::Product;
use std::io::{BufRead, Write};

/// The verbs a user interface must provide to drive a [`crate::Session`]
pub trait Presenter {
    /// Redraw the whole product list
    fn render_list(&mut self, products: &[Product]);
    /// Show one product with all of its attributes
    fn show_details(&mut self, index: usize, product: &Product);
    fn notify_success(&mut self, message: &str);
    fn notify_error(&mut self, message: &str);
    /// Yes/no question; `false` means the user backed out
    fn confirm(&mut self, question: &str) -> bool;
    /// Ask for a replacement stock value. `None` means the dialog was cancelled.
    fn prompt_stock(&mut self, product: &Product) -> Option<String>;
}

/// Presenter writing plain text to `output` and reading answers from `input`
pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            assume_yes: false,
        }
    }

    /// Answer every confirmation with yes without asking
    pub fn assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = self
            .output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
        {
            log::warn!("Failed to write to terminal: {}", e);
        }
    }

    /// Print `prompt` and read one trimmed line; `None` on EOF or read error
    fn read_answer(&mut self, prompt: &str) -> Option<String> {
        self.emit(prompt);

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                log::warn!("Failed to read from terminal: {}", e);
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn render_list(&mut self, products: &[Product]) {
        self.emit(&format_product_list(products));
    }

    fn show_details(&mut self, index: usize, product: &Product) {
        self.emit(&format_product_details(index, product));
    }

    fn notify_success(&mut self, message: &str) {
        self.emit(&format!("{message}\n"));
    }

    fn notify_error(&mut self, message: &str) {
        self.emit(&format!("Error: {message}\n"));
    }

    fn confirm(&mut self, question: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        match self.read_answer(&format!("{question} [y/N] ")) {
            Some(answer) => matches!(answer.to_lowercase().as_str(), "y" | "yes"),
            None => false,
        }
    }

    fn prompt_stock(&mut self, product: &Product) -> Option<String> {
        let prompt = format!("New stock for {} [{}]: ", product.name, product.stock);
        self.read_answer(&prompt).filter(|answer| !answer.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn presenter(input: &str) -> TerminalPresenter<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPresenter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(presenter: TerminalPresenter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(presenter.into_output()).unwrap()
    }

    #[test]
    fn confirm_accepts_yes() {
        let mut p = presenter("yes\n");
        assert!(p.confirm("Delete Widget?"));
        assert_eq!(output_of(p), "Delete Widget? [y/N] ");
    }

    #[test]
    fn confirm_defaults_to_no() {
        assert!(!presenter("\n").confirm("Delete?"));
        assert!(!presenter("nope\n").confirm("Delete?"));
        assert!(!presenter("").confirm("Delete?"));
    }

    #[test]
    fn assume_yes_skips_the_question() {
        let mut p = presenter("").assume_yes(true);
        assert!(p.confirm("Delete?"));
        assert_eq!(output_of(p), "");
    }

    #[test]
    fn prompt_stock_returns_answer() {
        let mut p = presenter(" 12 \n");
        let product = Product::new("Widget", 1.0, 5);
        assert_eq!(p.prompt_stock(&product), Some("12".to_string()));
        assert_eq!(output_of(p), "New stock for Widget [5]: ");
    }

    #[test]
    fn prompt_stock_blank_or_eof_cancels() {
        let product = Product::new("Widget", 1.0, 5);
        assert_eq!(presenter("\n").prompt_stock(&product), None);
        assert_eq!(presenter("").prompt_stock(&product), None);
    }

    #[test]
    fn errors_are_prefixed() {
        let mut p = presenter("");
        p.notify_error("bad input");
        assert_eq!(output_of(p), "Error: bad input\n");
    }
}
