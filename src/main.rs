use iced::widget::{button, column, container, row, text, text_editor, text_input};
use iced::{Alignment, Element, Length, Size, Task, Theme};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod state;
mod ui;

use state::error::LibraryError;
use state::form::Form;
use state::library::{Deletion, Library};
use ui::preview::Preview;

/// Main application state
struct Pokedex {
    /// The catalog database
    library: Library,
    /// Input fields, table cache and selection
    form: Form,
    /// Backing buffer of the multi-line description field
    description: text_editor::Content,
    /// What the image label currently shows
    preview: Preview,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    NumberChanged(String),
    NameChanged(String),
    CategoryChanged(String),
    DescriptionEdited(text_editor::Action),
    WeightChanged(String),
    HeightChanged(String),
    ImagePathChanged(String),
    /// User clicked "Select..." next to the image field
    PickImage,
    Insert,
    Update,
    Delete,
    /// User clicked a row in the table
    RowSelected(usize),
}

impl Pokedex {
    /// Create the application around an already migrated library
    fn new(library: Library) -> (Self, Task<Message>) {
        let mut app = Pokedex {
            library,
            form: Form::new(),
            description: text_editor::Content::new(),
            preview: Preview::default(),
        };

        app.refresh();
        info!(
            "🎮 Pokédex ready with {} Pokémon from {}",
            app.form.rows().len(),
            app.library.path().display()
        );

        (app, Task::none())
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NumberChanged(value) => self.form.fields.number = value,
            Message::NameChanged(value) => self.form.fields.name = value,
            Message::CategoryChanged(value) => self.form.fields.category = value,
            Message::DescriptionEdited(action) => {
                self.description.perform(action);
                self.form.fields.description = self.description.text();
            }
            Message::WeightChanged(value) => self.form.fields.weight = value,
            Message::HeightChanged(value) => self.form.fields.height = value,
            Message::ImagePathChanged(value) => self.form.fields.image_path = value,
            Message::PickImage => {
                if let Some(path) = ui::dialog::pick_image() {
                    self.form.fields.image_path = path.to_string_lossy().to_string();
                }
            }
            Message::Insert => self.insert(),
            Message::Update => self.update_selected(),
            Message::Delete => self.delete_selected(),
            Message::RowSelected(index) => {
                if let Some(image_path) = self.form.select(index).map(str::to_string) {
                    self.description = text_editor::Content::with_text(&self.form.fields.description);
                    self.preview = Preview::load(&image_path);
                }
            }
        }

        Task::none()
    }

    fn insert(&mut self) {
        match self.library.create(&self.form.fields) {
            Ok(record) => {
                ui::dialog::info(
                    "Success",
                    &format!("Pokémon {} inserted successfully.", record.name),
                );
                self.refresh();
            }
            Err(e) => report(&e),
        }
    }

    fn update_selected(&mut self) {
        match self.library.update(&self.form.fields) {
            Ok(changed) => {
                if changed == 0 {
                    warn!("Update matched no Pokémon numbered {}", self.form.fields.number.trim());
                }
                ui::dialog::info(
                    "Success",
                    &format!("Pokémon No. {} updated successfully.", self.form.fields.number.trim()),
                );
                self.refresh();
            }
            Err(e) => report(&e),
        }
    }

    fn delete_selected(&mut self) {
        let selected = self.form.selected_number();
        let outcome = self.library.delete(selected, |number| {
            ui::dialog::confirm("Confirm", &format!("Delete Pokémon No. {}?", number))
        });

        match (outcome, selected) {
            (Ok(Deletion::Deleted(_)), Some(number)) => {
                self.refresh();
                ui::dialog::info("OK", &format!("Pokémon No. {} deleted.", number));
            }
            (Ok(_), _) => {}
            (Err(e), _) => report(&e),
        }
    }

    /// Rebuild the table view from the database
    fn refresh(&mut self) {
        match self.library.list_all() {
            Ok(records) => self.form.reload(&records),
            Err(e) => report(&e),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let fields = &self.form.fields;

        let form = column![
            labelled("Number:", text_input("", &fields.number).on_input(Message::NumberChanged)),
            labelled("Name:", text_input("", &fields.name).on_input(Message::NameChanged)),
            labelled("Type:", text_input("", &fields.category).on_input(Message::CategoryChanged)),
            labelled(
                "Description:",
                text_editor(&self.description)
                    .on_action(Message::DescriptionEdited)
                    .height(70.0),
            ),
            labelled("Weight (kg):", text_input("", &fields.weight).on_input(Message::WeightChanged)),
            labelled("Height (m):", text_input("", &fields.height).on_input(Message::HeightChanged)),
            row![
                labelled(
                    "Image:",
                    text_input("", &fields.image_path).on_input(Message::ImagePathChanged),
                ),
                button("Select").on_press(Message::PickImage).padding(5),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
            row![
                button("Insert Pokémon").on_press(Message::Insert).padding(8),
                button("Update Pokémon").on_press(Message::Update).padding(8),
                button("Delete Pokémon").on_press(Message::Delete).padding(8),
            ]
            .spacing(20),
        ]
        .spacing(6);

        let content = column![
            text("Register / Edit Pokémon").size(18),
            form,
            text("Registered Pokémon").size(18),
            ui::table::view(self.form.rows(), self.form.selected()),
            container(self.preview.view())
                .center_x(Length::Fill)
                .padding(10),
        ]
        .spacing(10)
        .padding(10);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// A form row: fixed-width label followed by its input
fn labelled<'a>(label: &'a str, input: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    row![text(label).width(Length::Fixed(100.0)), input.into()]
        .spacing(10)
        .align_y(Alignment::Center)
        .into()
}

/// Show a failed operation to the user once
fn report(e: &LibraryError) {
    match e {
        LibraryError::Storage(_) | LibraryError::Io(_) => error!("❌ {}", e),
        _ => info!("Rejected: {}", e),
    }
    ui::dialog::error(&e.to_string());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    let library = Library::new()?;

    iced::application("Pokémon System", Pokedex::update, Pokedex::view)
        .theme(Pokedex::theme)
        .window_size(Size::new(900.0, 700.0))
        .centered()
        .run_with(move || Pokedex::new(library))?;

    Ok(())
}
