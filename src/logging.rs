use tracing_subscriber::EnvFilter;

/// Instala el subscriber global (fmt + filtro de `RUST_LOG`, por defecto `info`).
/// Los registros del crate `log` (p. ej. el `Logger` de actix) se reenvían
/// a este mismo subscriber. Llamar más de una vez no tiene efecto.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
