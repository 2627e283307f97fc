use std::fmt;

use money_format::{BuiltinLocales, LocaleFormatter, SeparatorResolver};

use crate::caret::track_caret;
use crate::config::{is_reserved, AmountFieldConfig};
use crate::host::{FieldEvent, HostField, ERROR_ATTRIBUTE};

/// Application callback receiving the amount in cents (`NaN` when the text is not a number)
/// together with the event that produced it.
pub type AmountCallback = Box<dyn FnMut(f64, &FieldEvent)>;

/// A monetary amount input bound to a [`HostField`].
///
/// On every change the typed text is reformatted for the locale, written back to the field with
/// the caret kept next to the digit being edited, validated (toggling [`ERROR_ATTRIBUTE`]) and
/// reported to the change callback in cents. Blur reports the current amount without
/// reformatting. Malformed text never blocks editing or event delivery.
pub struct AmountField<H: HostField> {
    formatter: LocaleFormatter,
    resolver: Box<dyn SeparatorResolver>,
    display: String,
    caret: Option<usize>,
    error: bool,
    host: H,
    on_change: Option<AmountCallback>,
    on_blur: Option<AmountCallback>,
}

impl<H: HostField> AmountField<H> {
    /// Bind `host` using the built-in locale table.
    pub fn mount(config: AmountFieldConfig, host: H) -> Self {
        Self::mount_with_resolver(config, host, BuiltinLocales)
    }

    /// Bind `host`, resolving locale separators through `resolver` (now and on locale changes).
    pub fn mount_with_resolver<R>(config: AmountFieldConfig, host: H, resolver: R) -> Self
    where
        R: SeparatorResolver + 'static,
    {
        let formatter = LocaleFormatter::with_resolver(&config.locale, &resolver);
        let display = match &config.value {
            Some(value) if !value.is_blank() => formatter.cents_to_display(value),
            _ => String::new(),
        };

        let mut field = Self {
            formatter,
            resolver: Box::new(resolver),
            display,
            caret: None,
            error: false,
            host,
            on_change: None,
            on_blur: None,
        };

        field.host.set_attribute("type", &config.input_type);
        for (name, value) in &config.attributes {
            if is_reserved(name) {
                log::warn!("ignoring passthrough attribute {name:?}; the amount field manages it");
                continue;
            }
            field.host.set_attribute(name, value);
        }
        field.commit();
        field
    }

    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(f64, &FieldEvent) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_blur(mut self, callback: impl FnMut(f64, &FieldEvent) + 'static) -> Self {
        self.on_blur = Some(Box::new(callback));
        self
    }

    pub fn handle_change(&mut self, event: &FieldEvent) {
        let raw = event.value.as_str();
        let formatted = self.formatter.reformat_to_locale(raw);
        self.caret = track_caret(
            raw,
            &formatted,
            self.host.selection_start(),
            self.formatter.grouping_separator(),
        );
        log::trace!(
            "amount change {raw:?} -> {formatted:?} (caret {:?})",
            self.caret
        );
        self.display = formatted;

        let cents = self.formatter.cents(&self.display);
        if let Some(callback) = self.on_change.as_mut() {
            callback(cents, event);
        }
        self.commit();
    }

    pub fn handle_blur(&mut self, event: &FieldEvent) {
        let cents = self.formatter.cents(&self.display);
        log::trace!("amount blur {:?} ({cents} cents)", self.display);
        if let Some(callback) = self.on_blur.as_mut() {
            callback(cents, event);
        }
    }

    /// Switch to another locale. The displayed text is kept as is and re-validated.
    pub fn set_locale(&mut self, locale: &str) {
        self.formatter = LocaleFormatter::with_resolver(locale, self.resolver.as_ref());
        self.caret = None;
        self.commit();
    }

    pub fn display_text(&self) -> &str {
        &self.display
    }

    /// Caret offset applied after the last change, `None` when the caret was left at the end.
    pub fn caret(&self) -> Option<usize> {
        self.caret
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Current amount in cents.
    pub fn cents(&self) -> f64 {
        self.formatter.cents(&self.display)
    }

    pub fn formatter(&self) -> &LocaleFormatter {
        &self.formatter
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    fn commit(&mut self) {
        self.host.set_value(&self.display);

        self.error = !self.formatter.is_valid_format(Some(&self.display));
        if self.error {
            self.host.set_attribute(ERROR_ATTRIBUTE, "");
        } else {
            self.host.remove_attribute(ERROR_ATTRIBUTE);
        }

        if let Some(caret) = self.caret {
            self.host.set_selection_range(caret, caret);
        }
    }
}

impl<H: HostField + fmt::Debug> fmt::Debug for AmountField<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AmountField")
            .field("formatter", &self.formatter)
            .field("display", &self.display)
            .field("caret", &self.caret)
            .field("error", &self.error)
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}
