/// Assign a model field and render only if the value actually changed.
///
/// # Example
///
/// ```ignore
/// update_field!(model.form.access_point, true)
/// ```
#[macro_export]
macro_rules! update_field {
    ($model_field:expr, $value:expr) => {{
        let value = $value;
        if $model_field != value {
            $model_field = value;
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};
}
