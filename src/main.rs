//! Road Ribbon Editor (Headless).
//!
//! Lädt ein Straßen-Dokument, baut alle Meshes und schreibt sie als JSON.
//!
//! Aufruf: `road-ribbon-editor <dokument.json> [ausgabe.json]`

use anyhow::Context;
use clap::Parser;
use road_ribbon_editor::{
    EditorCommand, EditorController, EditorOptions, EditorState, SceneExport,
};
use std::path::PathBuf;

/// Baut alle Meshes eines Straßen-Dokuments und exportiert sie als JSON.
#[derive(Debug, Parser)]
#[clap(name = "road-ribbon-editor", version)]
struct Args {
    /// Straßen-Dokument (JSON)
    document: PathBuf,
    /// Ausgabedatei; ohne Angabe wird auf stdout geschrieben
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Road Ribbon Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);

    let mut state = EditorState::with_options(options);
    let mut controller = EditorController::new();
    controller.init(&mut state);
    controller.handle_command(
        &mut state,
        EditorCommand::LoadDocument {
            path: args.document,
        },
    )?;

    let scene = controller.render(&state);
    log::info!(
        "{} Meshes, {} Vertices, {} Pfeile",
        scene.meshes.len(),
        scene.total_vertex_count(),
        scene.arrows.len()
    );

    let json = SceneExport::from_scene(&scene).to_json()?;
    match args.output {
        Some(path) => std::fs::write(&path, json)
            .with_context(|| format!("Ausgabe nicht schreibbar: {}", path.display()))?,
        None => println!("{}", json),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_args_document_and_optional_output() {
        let args = Args::try_parse_from(["road-ribbon-editor", "strasse.json"]).expect("gültig");
        assert_eq!(args.document, PathBuf::from("strasse.json"));
        assert_eq!(args.output, None);

        let args = Args::try_parse_from(["road-ribbon-editor", "strasse.json", "szene.json"])
            .expect("gültig");
        assert_eq!(args.output, Some(PathBuf::from("szene.json")));
    }

    #[test]
    fn test_args_missing_document_and_help_are_not_paths() {
        assert!(Args::try_parse_from(["road-ribbon-editor"]).is_err());

        let help = Args::try_parse_from(["road-ribbon-editor", "--help"])
            .expect_err("--help ist kein Dokument");
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
