use anyhow::Context;
use iced::{Element, Theme};
use rangeskin_ui::components::demo::{Event, RangeDemo};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    iced::application("Range Slider Demo", App::update, App::view)
        .theme(App::theme)
        .window_size((520.0, 560.0))
        .run()
        .context("running the demo window failed")
}

#[derive(Default)]
pub struct App {
    demo: RangeDemo,
}
#[derive(Clone, Debug)]
pub enum Message {
    Demo(Event),
}

impl App {
    fn update(&mut self, message: Message) {
        match message {
            Message::Demo(event) => self.demo.update(event),
        }
    }

    fn view(&self) -> Element<Message> {
        self.demo.view().map(Message::Demo)
    }

    fn theme(&self) -> Theme {
        self.demo.theme()
    }
}
