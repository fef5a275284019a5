use ratatui::{style::Style, widgets::Block, Frame};

use super::{dialogs, header, knowledge, layout, legend, qa, theme::Palette, toast};
use crate::logic::formatting::upload_status_lines;
use crate::model::Model;

/// Main render function - orchestrates all UI rendering.
///
/// Records where the drop zone landed so pointer events can be hit-tested.
pub fn render(f: &mut Frame, model: &mut Model) {
    let size = f.area();
    let palette = Palette::for_theme(model.ui.theme);

    f.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        size,
    );

    let upload_lines = upload_status_lines(&model.session.upload_status).len();
    let layout_info = layout::calculate_layout(
        size,
        upload_lines,
        model.session.suggestions_visible,
        model.session.citations_open,
    );
    model.ui.drop_zone_area = Some(layout_info.drop_zone_area);

    header::render_header(f, layout_info.header_area, &model.backend, &palette);

    knowledge::render_drop_zone(f, layout_info.drop_zone_area, model, &palette);
    knowledge::render_file_list(f, layout_info.files_area, &model.selection, &palette);
    knowledge::render_upload_status(f, layout_info.upload_area, &model.session, &palette);

    qa::render_question(f, layout_info.question_area, model, &palette);
    qa::render_top_k(f, layout_info.top_k_area, model, &palette);
    if let Some(area) = layout_info.suggestions_area {
        qa::render_suggestions(f, area, &model.session, &palette);
    }
    qa::render_answer(f, layout_info.answer_area, model, &palette);
    if let Some(area) = layout_info.citations_area {
        qa::render_citations(f, area, &model.session, &palette);
    }

    legend::render_legend(f, layout_info.legend_area, &palette);

    // Overlays last so they sit on top
    if model.selection.picker_open {
        dialogs::render_file_picker(f, &model.selection.picker_value, &palette);
    }
    if model.ui.confirm_reset {
        dialogs::render_reset_confirmation(f, &palette);
    }
    if let Some((message, kind, _)) = &model.ui.toast_message {
        toast::render_toast(f, size, message, *kind, &palette);
    }
}
