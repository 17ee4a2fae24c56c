//! Inline keyboards and callback data
//!
//! Callback data has the form `<prefix>:<value>`, e.g. `menu:edit_schedule`
//! or `weekday:monday`.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use crate::i18n::I18n;
use crate::models::{MenuOption, Picker, Weekday};

pub const MENU_PREFIX: &str = "menu";
pub const WEEKDAY_PREFIX: &str = "weekday";
pub const MOTIVATION: &str = "motivation";

/// Weekday buttons per keyboard row
const WEEKDAY_ROW_WIDTH: usize = 3;

pub fn menu_callback_data(value: &str) -> String {
    format!("{}:{}", MENU_PREFIX, value)
}

pub fn weekday_callback_data(day: Weekday) -> String {
    format!("{}:{}", WEEKDAY_PREFIX, day)
}

/// Main menu, one button per row
pub fn main_menu_keyboard(i18n: &I18n, lang: &str, include_motivation: bool) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = MenuOption::ALL
        .iter()
        .map(|option| {
            vec![InlineKeyboardButton::callback(
                i18n.t(&format!("buttons.menu.{}", option), lang, None),
                menu_callback_data(option.as_str()),
            )]
        })
        .collect();

    if include_motivation {
        rows.push(vec![InlineKeyboardButton::callback(
            i18n.t("buttons.menu.motivation", lang, None),
            menu_callback_data(MOTIVATION),
        )]);
    }

    InlineKeyboardMarkup::new(rows)
}

/// Seven weekday buttons, Monday first
pub fn weekday_keyboard(i18n: &I18n, lang: &str) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = Weekday::ALL
        .chunks(WEEKDAY_ROW_WIDTH)
        .map(|chunk| {
            chunk
                .iter()
                .map(|day| {
                    InlineKeyboardButton::callback(
                        i18n.t(&day.translation_key(), lang, None),
                        weekday_callback_data(*day),
                    )
                })
                .collect()
        })
        .collect();

    InlineKeyboardMarkup::new(rows)
}

/// Keyboard for a picker requested by the engine
pub fn markup_for(
    picker: Picker,
    i18n: &I18n,
    lang: &str,
    include_motivation: bool,
) -> Option<InlineKeyboardMarkup> {
    match picker {
        Picker::MainMenu => Some(main_menu_keyboard(i18n, lang, include_motivation)),
        Picker::WeekdayList => Some(weekday_keyboard(i18n, lang)),
        Picker::None => None,
    }
}
