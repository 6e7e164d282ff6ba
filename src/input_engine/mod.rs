pub mod events;
pub use self::events::{input_channel, InputEvent, InputReceiver, InputSender};
