use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use super::SessionError;

/// Line-oriented prompt/answer channel over any async reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub async fn say(&mut self, text: &str) -> Result<(), SessionError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    /// Prints `prompt` and reads one trimmed line. Bytes that are not valid
    /// UTF-8 are replaced rather than rejected, so a garbled line is just an
    /// unparseable answer.
    ///
    /// # Errors
    /// `SessionError::InputClosed` once the input reaches end of file.
    pub async fn ask(&mut self, prompt: &str) -> Result<String, SessionError> {
        self.output.write_all(prompt.as_bytes()).await?;
        self.output.write_all(b" ").await?;
        self.output.flush().await?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line).await? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    /// Asks until the answer is a number in `1..=count`.
    pub async fn choose(&mut self, prompt: &str, count: usize) -> Result<usize, SessionError> {
        let message = format!("Invalid choice. Please enter a number between 1 and {count}.");
        self.ask_parsed(prompt, &message, |n: &usize| (1..=count).contains(n)).await
    }

    /// Asks until the answer is a positive whole number.
    pub async fn ask_quantity(&mut self, prompt: &str) -> Result<u32, SessionError> {
        let message = "Invalid quantity. Please enter a positive whole number.";
        self.ask_parsed(prompt, message, |n: &u32| *n > 0).await
    }

    async fn ask_parsed<T, F>(
        &mut self,
        prompt: &str,
        message: &str,
        accept: F,
    ) -> Result<T, SessionError>
    where
        T: FromStr,
        F: Fn(&T) -> bool,
    {
        loop {
            let answer = self.ask(prompt).await?;
            match answer.parse::<T>() {
                Ok(value) if accept(&value) => return Ok(value),
                _ => {
                    debug!(answer = %answer, "Rejected input");
                    self.say(message).await?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn transcript<F, Fut, T>(input: &'static str, f: F) -> (T, String)
    where
        F: FnOnce(Console<&'static [u8], Vec<u8>>) -> Fut,
        Fut: std::future::Future<Output = (T, Console<&'static [u8], Vec<u8>>)>,
    {
        let console = Console::new(input.as_bytes(), Vec::new());
        let (value, console) = f(console).await;
        (value, String::from_utf8(console.into_output()).unwrap())
    }

    #[tokio::test]
    async fn test_ask_trims_line() {
        let (answer, out) = transcript("  Alice Smith \n", |mut c| async move {
            let answer = c.ask("Name:").await.unwrap();
            (answer, c)
        })
        .await;
        assert_eq!(answer, "Alice Smith");
        assert_eq!(out, "Name: ");
    }

    #[tokio::test]
    async fn test_choose_reprompts_until_valid() {
        let (choice, out) = transcript("abc\n9\n0\n2\n", |mut c| async move {
            let choice = c.choose("Pick:", 3).await.unwrap();
            (choice, c)
        })
        .await;
        assert_eq!(choice, 2);
        let rejected = out.matches("Invalid choice. Please enter a number between 1 and 3.");
        assert_eq!(rejected.count(), 3);
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_an_invalid_choice() {
        let mut console = Console::new(&b"\xff\xfe\n2\n"[..], Vec::new());
        let choice = console.choose("Pick:", 3).await.unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(choice, 2);
        assert_eq!(out.matches("Invalid choice").count(), 1);
    }

    #[tokio::test]
    async fn test_quantity_rejects_zero_and_negative() {
        let (quantity, out) = transcript("0\n-4\n12\n", |mut c| async move {
            let quantity = c.ask_quantity("Qty:").await.unwrap();
            (quantity, c)
        })
        .await;
        assert_eq!(quantity, 12);
        assert_eq!(out.matches("Invalid quantity").count(), 2);
    }

    #[tokio::test]
    async fn test_end_of_input_is_reported() {
        let (result, _) = transcript("", |mut c| async move {
            let result = c.ask("Name:").await;
            (result, c)
        })
        .await;
        assert!(matches!(result, Err(SessionError::InputClosed)));
    }
}
