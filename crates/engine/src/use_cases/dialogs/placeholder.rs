use guildforms_shared::{DialogDescription, ResponsePayload};

use super::{DialogContext, NavigationInstruction, KEY_BACK, KEY_CLOSE};

const KEY_COMING_SOON: &str = "placeholder.coming_soon";

/// Features that are announced but not built yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderFeature {
    ClaimTrust,
    BankSecurity,
}

impl PlaceholderFeature {
    fn key(&self) -> &'static str {
        match self {
            Self::ClaimTrust => "claim_trust",
            Self::BankSecurity => "bank_security",
        }
    }

    fn title_key(&self) -> String {
        format!("placeholder.{}.title", self.key())
    }

    fn info_key(&self) -> String {
        format!("placeholder.{}.info", self.key())
    }
}

/// "Coming soon" stub with a single button.
///
/// A terminal placeholder was opened on its own and its button ends the
/// session; otherwise the button returns to the previous dialog.
pub struct PlaceholderDialog {
    feature: PlaceholderFeature,
    terminal: bool,
}

impl PlaceholderDialog {
    pub fn new(feature: PlaceholderFeature, terminal: bool) -> Self {
        Self { feature, terminal }
    }

    pub fn feature(&self) -> PlaceholderFeature {
        self.feature
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub(super) fn build(&self, ctx: &DialogContext<'_>) -> DialogDescription {
        let title = ctx.text(&self.feature.title_key());
        let action = if self.terminal { KEY_CLOSE } else { KEY_BACK };

        DialogDescription::new(title.clone())
            .line(title)
            .line(ctx.text(&self.feature.info_key()))
            .line(ctx.text(KEY_COMING_SOON))
            .button(ctx.text(action))
    }

    pub(super) fn on_response(
        &self,
        ctx: &DialogContext<'_>,
        payload: ResponsePayload,
    ) -> NavigationInstruction {
        if !self.terminal {
            return NavigationInstruction::GoBack;
        }
        // A stand-alone stub has nothing to go back to.
        match payload {
            ResponsePayload::Accepted { .. } => NavigationInstruction::CloseSession,
            ResponsePayload::Closed | ResponsePayload::Invalid => ctx.back_or_close(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::TestContext;

    #[test]
    fn body_has_title_info_and_coming_soon_lines() {
        let env = TestContext::new();
        let dialog = PlaceholderDialog::new(PlaceholderFeature::ClaimTrust, false);

        let description = dialog.build(&env.ctx(2));

        assert_eq!(description.title, "§6Trust Management");
        assert_eq!(description.body.len(), 3);
        assert_eq!(description.body[0].text, "§6Trust Management");
        assert_eq!(
            description.body[1].text,
            "§7Grant other players access to this claim."
        );
        assert_eq!(description.body[2].text, "§eComing soon!");
        assert_eq!(description.button_labels(), vec!["§cBack"]);
    }

    #[test]
    fn terminal_placeholder_offers_close() {
        let env = TestContext::new();
        let dialog = PlaceholderDialog::new(PlaceholderFeature::BankSecurity, true);

        let description = dialog.build(&env.ctx(1));
        assert_eq!(description.button_labels(), vec!["§cClose"]);

        let instruction = dialog.on_response(&env.ctx(1), ResponsePayload::button(0));
        assert!(matches!(instruction, NavigationInstruction::CloseSession));
    }

    #[test]
    fn closed_and_invalid_both_go_back() {
        let env = TestContext::new();
        for dialog in [
            PlaceholderDialog::new(PlaceholderFeature::ClaimTrust, false),
            PlaceholderDialog::new(PlaceholderFeature::BankSecurity, false),
            PlaceholderDialog::new(PlaceholderFeature::BankSecurity, true),
        ] {
            let closed = dialog.on_response(&env.ctx(2), ResponsePayload::Closed);
            let invalid = dialog.on_response(&env.ctx(2), ResponsePayload::Invalid);
            assert!(matches!(closed, NavigationInstruction::GoBack));
            assert!(matches!(invalid, NavigationInstruction::GoBack));
        }
    }

    #[test]
    fn back_button_goes_back() {
        let env = TestContext::new();
        let dialog = PlaceholderDialog::new(PlaceholderFeature::ClaimTrust, false);
        let instruction = dialog.on_response(&env.ctx(2), ResponsePayload::button(0));
        assert!(matches!(instruction, NavigationInstruction::GoBack));
    }

    #[test]
    fn non_terminal_stub_goes_back_on_every_response() {
        let env = TestContext::new();
        let dialog = PlaceholderDialog::new(PlaceholderFeature::ClaimTrust, false);
        for payload in [
            ResponsePayload::button(0),
            ResponsePayload::Closed,
            ResponsePayload::Invalid,
        ] {
            // Even as root; the session turns the empty stack into a close.
            let instruction = dialog.on_response(&env.ctx(1), payload);
            assert!(matches!(instruction, NavigationInstruction::GoBack));
        }
    }

    #[test]
    fn dismissing_a_standalone_stub_closes_the_session() {
        let env = TestContext::new();
        let dialog = PlaceholderDialog::new(PlaceholderFeature::BankSecurity, true);
        let instruction = dialog.on_response(&env.ctx(1), ResponsePayload::Closed);
        assert!(matches!(instruction, NavigationInstruction::CloseSession));
    }
}
