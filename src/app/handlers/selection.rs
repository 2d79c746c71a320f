//! Handler für Selektions-Operationen.

use crate::app::EditorState;
use crate::core::HandleKind;

/// Selektiert Anker oder Handle eines Punkts.
///
/// Ungültige Indizes lassen die Selektion unverändert.
pub fn select_handle(state: &mut EditorState, index: usize, handle: HandleKind) {
    if index >= state.path.len() {
        log::warn!(
            "Selektion ignoriert: Punkt {} existiert nicht (Anzahl {})",
            index,
            state.path.len()
        );
        return;
    }
    if handle == HandleKind::None {
        state.selection.clear();
        return;
    }
    state.selection.select(index, handle);
    log::debug!("Selektiert: Punkt {} ({:?})", index, handle);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut EditorState) {
    state.selection.clear();
}
