use mosaic_state::GalleryMessage;
use mosaic_types::ItemId;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("{command} expects {expected} argument(s)")]
    Arity {
        command: &'static str,
        expected: usize,
    },

    #[error("Invalid number for {command}: {value}")]
    InvalidNumber {
        command: &'static str,
        value: String,
    },
}

/// One line of host input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Gallery(GalleryMessage),
    WindowResized { width: u32 },
    Show,
    Quit,
}

impl Message {
    /// Whether the frame should be written out after handling this message
    pub fn renders(&self) -> bool {
        !matches!(self, Message::Quit)
    }
}

fn number<T: FromStr>(command: &'static str, value: &str) -> Result<T, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidNumber {
        command,
        value: value.to_string(),
    })
}

fn args<'a, const N: usize>(
    command: &'static str,
    rest: &[&'a str],
) -> Result<[&'a str; N], CommandError> {
    <[&str; N]>::try_from(rest).map_err(|_| CommandError::Arity {
        command,
        expected: N,
    })
}

fn toggle(command: &'static str, rest: &[&str], checked: bool) -> Result<Message, CommandError> {
    let [id] = args::<1>(command, rest)?;
    Ok(Message::Gallery(GalleryMessage::Toggle {
        id: ItemId(number(command, id)?),
        checked,
    }))
}

impl FromStr for Message {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, rest)) = words.split_first() else {
            return Err(CommandError::Empty);
        };

        match command {
            "resize" => {
                let [width] = args::<1>("resize", rest)?;
                Ok(Message::WindowResized {
                    width: number("resize", width)?,
                })
            }
            "move" => {
                let [from, to] = args::<2>("move", rest)?;
                Ok(Message::Gallery(GalleryMessage::Reorder {
                    from: number("move", from)?,
                    to: number("move", to)?,
                }))
            }
            "check" => toggle("check", rest, true),
            "uncheck" => toggle("uncheck", rest, false),
            "delete" => {
                let [] = args::<0>("delete", rest)?;
                Ok(Message::Gallery(GalleryMessage::DeleteSelected))
            }
            "show" => Ok(Message::Show),
            "quit" | "exit" => Ok(Message::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
