use std::rc::Rc;
use std::cell::RefCell;
use gtk4 as gtk;
use gtk4::prelude::*;
use gtk4::pango;

use crate::game::view::card_view;
use crate::game::{CardLabel, CardLook, CardView, Event};
use super::state::AppState;
use super::app::dispatch;

pub const CONTENT_MARGIN: i32 = 12;
pub const CARD_GAP: i32 = 10;

pub fn build_board_grid(state: &Rc<RefCell<AppState>>, columns: usize, rows: usize, count: usize) -> gtk::Grid {
    let grid = gtk::Grid::new();
    grid.add_css_class("sequence-board");
    grid.set_row_spacing(CARD_GAP as u32);
    grid.set_column_spacing(CARD_GAP as u32);
    grid.set_row_homogeneous(true);
    grid.set_column_homogeneous(true);
    grid.set_halign(gtk::Align::Fill);
    grid.set_valign(gtk::Align::Fill);
    grid.set_hexpand(true);
    grid.set_vexpand(true);

    let css_provider = state.borrow().dynamic_css_provider.clone();
    let (columns, rows) = (columns.max(1) as i32, rows.max(1) as i32);

    let update_styles = {
        let css_provider = css_provider.clone();
        move |grid: &gtk::Grid| {
            let width = grid.width();
            let height = grid.height();
            if width > 0 && height > 0 {
                let cell_width = (width - (columns - 1) * CARD_GAP) / columns;
                let cell_height = (height - (rows - 1) * CARD_GAP) / rows;
                let card_radius = (cell_width.min(cell_height) as f64 * 0.15) as i32;

                if let Some(provider) = &css_provider {
                    provider.load_from_data(&format!(
                        ".number-card {{ border-radius: {card_radius}px; }}"
                    ));
                }
            }
        }
    };

    let update_styles_clone = update_styles.clone();
    grid.connect_closure(
        "notify::width",
        false,
        glib::closure_local!(move |grid: gtk::Grid, _: glib::ParamSpec| {
            update_styles_clone(&grid);
        }),
    );
    grid.connect_closure(
        "notify::height",
        false,
        glib::closure_local!(move |grid: gtk::Grid, _: glib::ParamSpec| {
            update_styles(&grid);
        }),
    );

    let mut buttons = Vec::with_capacity(count);

    for index in 0..count {
        let aspect_frame = gtk::AspectFrame::builder()
            .ratio(1.0)
            .obey_child(false)
            .halign(gtk::Align::Fill)
            .valign(gtk::Align::Fill)
            .hexpand(true)
            .vexpand(true)
            .build();

        let button = gtk::Button::builder()
            .css_classes(vec!["number-card"])
            .sensitive(false)
            .build();
        button.set_hexpand(true);
        button.set_vexpand(true);

        let drawing_area = gtk::DrawingArea::builder()
            .hexpand(true)
            .vexpand(true)
            .build();
        drawing_area.add_css_class("number-card-label");

        let state_draw = state.clone();
        drawing_area.set_draw_func(move |area, cr, width, height| {
            let Some(view) = card_view(&state_draw.borrow().session, index) else {
                return;
            };
            draw_card_label(area, cr, width, height, view.label);
        });

        button.set_child(Some(&drawing_area));

        let state_click = state.clone();
        button.connect_clicked(move |_| {
            dispatch(&state_click, Event::CardClicked(index));
        });

        aspect_frame.set_child(Some(&button));

        let x = index as i32 % columns;
        let y = index as i32 / columns;
        grid.attach(&aspect_frame, x, y, 1, 1);
        buttons.push(button);
    }

    state.borrow_mut().grid_buttons = buttons;

    grid
}

fn draw_card_label(
    area: &gtk::DrawingArea,
    cr: &cairo::Context,
    width: i32,
    height: i32,
    label: CardLabel,
) {
    let text = match label {
        CardLabel::Number(value) => value.to_string(),
        CardLabel::Hidden => "?".to_string(),
    };

    let min_dim = width.min(height) as f64;
    let font_size = match label {
        CardLabel::Number(_) => min_dim * 0.42,
        CardLabel::Hidden => min_dim * 0.36,
    };

    cr.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(cr);
    let mut font_desc = pango::FontDescription::new();
    font_desc.set_family("Cantarell, Noto Sans, sans");
    font_desc.set_weight(pango::Weight::Bold);
    font_desc.set_size((font_size * pango::SCALE as f64) as i32);
    layout.set_font_description(Some(&font_desc));
    layout.set_text(&text);

    let fg = area.style_context().color();
    cr.set_source_rgba(
        fg.red() as f64,
        fg.green() as f64,
        fg.blue() as f64,
        fg.alpha() as f64,
    );

    let (text_width, text_height) = layout.pixel_size();
    cr.move_to(
        (width as f64 - text_width as f64) / 2.0,
        (height as f64 - text_height as f64) / 2.0,
    );

    pangocairo::functions::show_layout(cr, &layout);
}

/// Brings one card button in line with its view.
pub fn apply_card_view(button: &gtk::Button, view: CardView) {
    button.set_sensitive(view.enabled);
    button.remove_css_class("correct");
    button.remove_css_class("wrong");
    match view.look {
        CardLook::Plain => (),
        CardLook::Correct => button.add_css_class("correct"),
        CardLook::Wrong => button.add_css_class("wrong"),
    }
    if let Some(child) = button.child() {
        child.queue_draw();
    }
}
