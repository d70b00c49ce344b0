use anyhow::Result;
use crux_core::typegen::TypeGen;
use rfid_config_core::{
    events::{FormEvent, ScanEvent, SocketEvent},
    types::{ConnectionState, FormField, ScanSelectionMode},
    App, NavigationOperation, SocketOperation,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Nested event enums are only reached through `Event`, register them so every
    // variant is traced
    gen.register_type::<SocketEvent>()?;
    gen.register_type::<FormEvent>()?;
    gen.register_type::<ScanEvent>()?;

    gen.register_type::<FormField>()?;
    gen.register_type::<ConnectionState>()?;
    gen.register_type::<ScanSelectionMode>()?;
    gen.register_type::<SocketOperation>()?;
    gen.register_type::<NavigationOperation>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
