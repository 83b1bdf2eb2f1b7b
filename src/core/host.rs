/// Document-side effects the scene asks for.
///
/// The browser implementation lives in `dom::DomHost`; tests record calls.
pub trait SceneHost {
    /// Scroll the element matching `selector` into view. Returns `false` when
    /// nothing matches.
    fn scroll_into_view(&mut self, selector: &str) -> bool;

    /// Show or hide the "clickable" cursor affordance on the render surface.
    fn set_pointer_actionable(&mut self, actionable: bool);
}
