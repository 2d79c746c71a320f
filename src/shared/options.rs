//! Zentrale Konfiguration für den Road Ribbon Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kurve ───────────────────────────────────────────────────────────

/// Samples pro Bézier-Segment.
pub const CURVE_RESOLUTION: usize = 10;
/// Obergrenze der Samples pro Segment.
pub const CURVE_RESOLUTION_MAX: usize = 1024;
/// Standard-Spannung für Handle-Längen.
pub const CURVE_TENSION: f32 = 0.4;
/// Untergrenze der Spannung.
pub const CURVE_TENSION_MIN: f32 = 0.1;
/// Obergrenze der Spannung.
pub const CURVE_TENSION_MAX: f32 = 0.9;

// ── Straße ──────────────────────────────────────────────────────────

/// Fahrbahnbreite in Welteinheiten.
pub const ROAD_WIDTH: f32 = 4.0;
/// UV-Dichte entlang der Fahrbahn.
pub const ROAD_UV_TILING_DENSITY: f32 = 0.5;
/// UV-Skalierung quer zur Fahrbahn.
pub const ROAD_UV_TILING_WIDTH: f32 = 1.0;

// ── Gelände-Bankett ─────────────────────────────────────────────────

/// Bankett-Breite je Seite.
pub const TERRAIN_SIZE: f32 = 2.0;
/// Absenkung der Bankett-Außenkante.
pub const TERRAIN_HEIGHT_OFFSET: f32 = -0.8;
/// Horizontale UV-Kachelung des Banketts.
pub const TERRAIN_UV_HORIZONTAL_TILE: f32 = 1.0;

// ── Leitplanken ─────────────────────────────────────────────────────

/// Seitlicher Abstand der Leitplanke von der Fahrbahnmitte.
pub const RAILING_OFFSET: f32 = 1.0;
/// Höhe der Wand-Variante.
pub const RAILING_WALL_HEIGHT: f32 = 1.0;
/// Höhe der Flächen-Variante.
pub const RAILING_PLANE_HEIGHT: f32 = 1.0;
/// Weltlänge pro Textur-Wiederholung.
pub const RAILING_UV_REPEAT_FACTOR: f32 = 2.0;

// ── Fahrbahnlinien ──────────────────────────────────────────────────

/// Linienbreite in Welteinheiten.
pub const TRAFFIC_LINE_WIDTH: f32 = 0.2;
/// Abstand zwischen Richtungspfeilen.
pub const TRAFFIC_ARROW_SPACING: f32 = 5.0;
/// Länge der Pfeil-Flügel.
pub const TRAFFIC_ARROW_SIZE: f32 = 2.0;
/// Seitlicher Abstand einer neu hinzugefügten Linie zur vorherigen.
pub const TRAFFIC_LINE_OFFSET_STEP: f32 = 1.0;

// ── Flammenspur ─────────────────────────────────────────────────────

/// Mindestabstand zwischen zwei Spur-Punkten.
pub const FLAME_POINT_SPACING: f32 = 1.0;
/// Breite der Spur.
pub const FLAME_TRAIL_WIDTH: f32 = 1.0;
/// Höhe der Spur über dem Boden.
pub const FLAME_GROUND_CLEARANCE: f32 = 0.05;
/// Boost-Dauer in Sekunden.
pub const FLAME_BOOST_DURATION: f32 = 3.0;

// ── Historie ────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_MAX_DEPTH: usize = 200;
/// Maximale Anzahl protokollierter Commands.
pub const COMMAND_LOG_MAX_ENTRIES: usize = 1000;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `road_ribbon_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Kurve ───────────────────────────────────────────────────
    /// Samples pro Bézier-Segment
    pub curve_resolution: usize,
    /// Spannung für Handle-Längen (wird auf [0.1, 0.9] begrenzt)
    pub curve_tension: f32,
    /// Neue Punkte am Anfang statt am Ende einfügen
    #[serde(default)]
    pub add_points_to_start: bool,

    // ── Straße ──────────────────────────────────────────────────
    /// Fahrbahnbreite
    pub road_width: f32,
    /// UV-Dichte entlang der Fahrbahn
    pub road_uv_tiling_density: f32,
    /// UV-Skalierung quer zur Fahrbahn
    pub road_uv_tiling_width: f32,
    /// Normalen der Fahrbahn umdrehen
    #[serde(default)]
    pub road_flip_normals: bool,

    // ── Gelände ─────────────────────────────────────────────────
    /// Bankette neben der Fahrbahn erzeugen
    #[serde(default = "default_true")]
    pub generate_terrain: bool,
    /// Bankett-Breite
    pub terrain_size: f32,
    /// Absenkung der Bankett-Außenkante
    pub terrain_height_offset: f32,
    /// Horizontale UV-Kachelung des Banketts
    pub terrain_uv_horizontal_tile: f32,

    // ── Leitplanken ─────────────────────────────────────────────
    /// Abstand von der Fahrbahnmitte
    pub railing_offset: f32,
    /// Höhe der Wände
    pub railing_wall_height: f32,
    /// Höhe der Flächen
    pub railing_plane_height: f32,
    /// Weltlänge pro Textur-Wiederholung
    pub railing_uv_repeat_factor: f32,

    // ── Fahrbahnlinien ──────────────────────────────────────────
    /// Standard-Linienbreite
    pub traffic_line_width: f32,
    /// Standard-Pfeilabstand
    pub traffic_arrow_spacing: f32,
    /// Standard-Pfeilgröße
    pub traffic_arrow_size: f32,

    // ── Flammenspur ─────────────────────────────────────────────
    /// Mindestabstand zwischen Spur-Punkten
    pub flame_point_spacing: f32,
    /// Spurbreite
    pub flame_trail_width: f32,
    /// Boost-Dauer in Sekunden
    pub flame_boost_duration: f32,

    // ── Historie ────────────────────────────────────────────────
    /// Maximale Undo-Tiefe
    #[serde(default = "default_history_max_depth")]
    pub history_max_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            curve_resolution: CURVE_RESOLUTION,
            curve_tension: CURVE_TENSION,
            add_points_to_start: false,

            road_width: ROAD_WIDTH,
            road_uv_tiling_density: ROAD_UV_TILING_DENSITY,
            road_uv_tiling_width: ROAD_UV_TILING_WIDTH,
            road_flip_normals: false,

            generate_terrain: true,
            terrain_size: TERRAIN_SIZE,
            terrain_height_offset: TERRAIN_HEIGHT_OFFSET,
            terrain_uv_horizontal_tile: TERRAIN_UV_HORIZONTAL_TILE,

            railing_offset: RAILING_OFFSET,
            railing_wall_height: RAILING_WALL_HEIGHT,
            railing_plane_height: RAILING_PLANE_HEIGHT,
            railing_uv_repeat_factor: RAILING_UV_REPEAT_FACTOR,

            traffic_line_width: TRAFFIC_LINE_WIDTH,
            traffic_arrow_spacing: TRAFFIC_ARROW_SPACING,
            traffic_arrow_size: TRAFFIC_ARROW_SIZE,

            flame_point_spacing: FLAME_POINT_SPACING,
            flame_trail_width: FLAME_TRAIL_WIDTH,
            flame_boost_duration: FLAME_BOOST_DURATION,

            history_max_depth: HISTORY_MAX_DEPTH,
        }
    }
}

/// Serde-Default für boolesche Schalter, die standardmäßig aktiv sind.
fn default_true() -> bool {
    true
}

/// Serde-Default für `history_max_depth` (Abwärtskompatibilität).
fn default_history_max_depth() -> usize {
    HISTORY_MAX_DEPTH
}

/// Begrenzt die Samples pro Segment auf `1..=CURVE_RESOLUTION_MAX`.
pub fn clamp_resolution(resolution: usize) -> usize {
    resolution.clamp(1, CURVE_RESOLUTION_MAX)
}

/// Begrenzt eine Spannung auf den gültigen Bereich.
pub fn clamp_tension(tension: f32) -> f32 {
    tension.clamp(CURVE_TENSION_MIN, CURVE_TENSION_MAX)
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<EditorOptions>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("road_ribbon_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("road_ribbon_editor.toml")
    }

    /// Korrigiert Werte außerhalb der gültigen Bereiche.
    pub fn sanitized(mut self) -> Self {
        let tension = clamp_tension(self.curve_tension);
        if tension != self.curve_tension {
            log::warn!(
                "curve_tension {} außerhalb [{}, {}], verwende {}",
                self.curve_tension,
                CURVE_TENSION_MIN,
                CURVE_TENSION_MAX,
                tension
            );
            self.curve_tension = tension;
        }
        let resolution = clamp_resolution(self.curve_resolution);
        if resolution != self.curve_resolution {
            log::warn!(
                "curve_resolution {} außerhalb [1, {}], verwende {}",
                self.curve_resolution,
                CURVE_RESOLUTION_MAX,
                resolution
            );
            self.curve_resolution = resolution;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip_through_toml() {
        let opts = EditorOptions::default();
        let text = toml::to_string_pretty(&opts).expect("serialisierbar");
        let back: EditorOptions = toml::from_str(&text).expect("lesbar");
        assert_eq!(back, opts);
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let full = toml::to_string(&EditorOptions::default()).expect("serialisierbar");
        let reduced: Vec<&str> = full
            .lines()
            .filter(|line| {
                !line.starts_with("add_points_to_start")
                    && !line.starts_with("generate_terrain")
                    && !line.starts_with("history_max_depth")
            })
            .collect();
        let opts: EditorOptions = toml::from_str(&reduced.join("\n")).expect("gültig");
        assert!(!opts.add_points_to_start);
        assert!(opts.generate_terrain);
        assert_eq!(opts.history_max_depth, HISTORY_MAX_DEPTH);
    }

    #[test]
    fn test_sanitized_clamps_tension_and_resolution() {
        let opts = EditorOptions {
            curve_tension: 2.0,
            curve_resolution: 0,
            ..EditorOptions::default()
        }
        .sanitized();
        assert_eq!(opts.curve_tension, CURVE_TENSION_MAX);
        assert_eq!(opts.curve_resolution, 1);
        assert_eq!(clamp_tension(0.0), CURVE_TENSION_MIN);
    }

    #[test]
    fn test_sanitized_caps_huge_resolution() {
        let opts = EditorOptions {
            curve_resolution: usize::MAX,
            ..EditorOptions::default()
        }
        .sanitized();
        assert_eq!(opts.curve_resolution, CURVE_RESOLUTION_MAX);
        assert_eq!(clamp_resolution(CURVE_RESOLUTION), CURVE_RESOLUTION);
    }

    #[test]
    fn test_load_from_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("road_ribbon_editor_missing_options.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!(
            "road_ribbon_editor_options_{}.toml",
            std::process::id()
        ));
        let opts = EditorOptions {
            road_width: 6.5,
            add_points_to_start: true,
            ..EditorOptions::default()
        };
        opts.save_to_file(&path).expect("speicherbar");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, opts);
    }
}
