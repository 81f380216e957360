use tracing::{debug, warn};

use crate::error::ToggleError;
use crate::host::Host;
use crate::selectors::ToggleConfig;

/// Hides the description block and reveals the documentation block when the
/// documentation button is clicked.
///
/// State machine over {description, documentation}:
/// - before the first successful activation: whatever the markup declared
/// - after it: {hidden, visible}, with no transition back
///
/// Elements are looked up by selector on every activation, so blocks inserted after
/// load are picked up on the next click.
#[derive(Debug, Clone, Default)]
pub struct VisibilityToggler {
    config: ToggleConfig,
}

impl VisibilityToggler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ToggleConfig) -> Result<Self, ToggleError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    /// Entry point, called once by the host's startup sequence.
    ///
    /// Only registers the load hook. The trigger is looked up when the load signal
    /// fires; if it is missing then, the lookup error goes to the host and no click
    /// handler is attached.
    pub fn initialize<H: Host>(&self, host: &H) -> Result<(), ToggleError> {
        let toggler = self.clone();
        let handle = host.clone();
        host.on_load(Box::new(move || toggler.attach(&handle)))
    }

    /// Load hook body: attach the click handler to the trigger.
    pub fn attach<H: Host>(&self, host: &H) -> Result<(), ToggleError> {
        debug!(trigger = %self.config.trigger, "document loaded, wiring trigger");
        let trigger = self.lookup(host, &self.config.trigger)?;

        let toggler = self.clone();
        let handle = host.clone();
        host.on_click(
            &trigger,
            Box::new(move || toggler.on_trigger_activated(&handle)),
        )?;

        debug!(trigger = %self.config.trigger, "click handler attached");
        Ok(())
    }

    /// Click handler body.
    ///
    /// Order is fixed: hide first, then show. A failed lookup stops the activation
    /// where it is; nothing already applied is rolled back.
    pub fn on_trigger_activated<H: Host>(&self, host: &H) -> Result<(), ToggleError> {
        let ToggleConfig {
            hide_target,
            show_target,
            hidden_class,
            ..
        } = &self.config;

        debug!(hide = %hide_target, show = %show_target, "trigger activated");

        let hidden = self.lookup(host, hide_target)?;
        host.add_class(&hidden, hidden_class)?;

        let shown = self.lookup(host, show_target)?;
        host.remove_class(&shown, hidden_class)?;

        Ok(())
    }

    fn lookup<H: Host>(&self, host: &H, selector: &str) -> Result<H::Element, ToggleError> {
        host.query_selector(selector).ok_or_else(|| {
            warn!(%selector, "element not found");
            ToggleError::not_found(selector)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::VisibilityToggler;
    use crate::error::ToggleError;
    use crate::memory::{ClassOp, InMemoryDocument};
    use crate::selectors::ToggleConfig;
    use pretty_assertions::assert_eq;

    fn page() -> InMemoryDocument {
        InMemoryDocument::new()
            .with_element("documentation-button", &[])
            .with_element("description-block", &[])
            .with_element("documentation-block", &["hidden"])
    }

    #[test]
    fn initialize_only_registers_load_hook() {
        let doc = page();
        VisibilityToggler::new().initialize(&doc).unwrap();
        assert!(doc.queries().is_empty());
        assert_eq!(doc.load_listener_count(), 1);
        assert_eq!(doc.click_listener_count("documentation-button"), 0);
    }

    #[test]
    fn activation_hides_then_shows() {
        let doc = page();
        VisibilityToggler::new().on_trigger_activated(&doc).unwrap();
        assert_eq!(
            doc.mutations(),
            vec![
                ClassOp::Add {
                    id: "description-block".to_string(),
                    class: "hidden".to_string(),
                },
                ClassOp::Remove {
                    id: "documentation-block".to_string(),
                    class: "hidden".to_string(),
                },
            ]
        );
    }

    #[test]
    fn missing_show_target_keeps_hide_step() {
        let doc = InMemoryDocument::new().with_element("description-block", &[]);
        let err = VisibilityToggler::new()
            .on_trigger_activated(&doc)
            .unwrap_err();
        assert_eq!(err, ToggleError::not_found("#documentation-block"));
        assert_eq!(doc.has_class("description-block", "hidden"), Some(true));
    }

    #[test]
    fn custom_config_uses_its_own_marker() {
        let config = ToggleConfig {
            hidden_class: "is-hidden".to_string(),
            ..ToggleConfig::default()
        };
        let doc = InMemoryDocument::new()
            .with_element("description-block", &[])
            .with_element("documentation-block", &["is-hidden"]);
        VisibilityToggler::with_config(config)
            .unwrap()
            .on_trigger_activated(&doc)
            .unwrap();
        assert_eq!(doc.has_class("description-block", "is-hidden"), Some(true));
        assert_eq!(doc.has_class("documentation-block", "is-hidden"), Some(false));
    }

    #[test]
    fn with_config_rejects_invalid() {
        let config = ToggleConfig {
            hide_target: String::new(),
            ..ToggleConfig::default()
        };
        assert!(VisibilityToggler::with_config(config).is_err());
    }
}
