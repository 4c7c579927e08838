use crate::prefix::LEVEL_WIDTH;
use crate::time::{CalendarBreakdown, CalendarField, Zone, breakdown};
use std::fmt::Write;
use std::time::SystemTime;

/// Incrementally updated log prefix.
///
/// Consecutive log lines usually differ only in their seconds and sub-seconds, so the text
/// of every coarser field is kept and reused as long as its value is unchanged. Output is
/// always identical to [`prefix_reference`](crate::prefix::prefix_reference), whatever
/// order the timestamps arrive in.
///
/// `update` needs `&mut self`: give each log stream its own cache, or put a shared one
/// behind a lock.
#[derive(Debug)]
pub struct PrefixCache {
    tag: String,
    zone: Zone,
    last_update: Option<SystemTime>,
    rendered: Option<RenderedFields>,
    output: String,
}

/// Date-time text split at field boundaries.
#[derive(Debug)]
struct RenderedFields {
    fields: CalendarBreakdown,
    /// `YYYY-MM-DD HH:MM:SS.ffffff`
    text: String,
    /// Byte offset in `text` where each field starts, indexed by [`CalendarField::index`].
    offsets: [usize; CalendarField::ALL.len()],
}

impl RenderedFields {
    fn new(fields: CalendarBreakdown) -> Self {
        let mut rendered = Self {
            fields,
            text: String::with_capacity(32),
            offsets: [0; CalendarField::ALL.len()],
        };
        rendered.render_from(CalendarField::Year);
        rendered
    }

    fn refresh(&mut self, fields: CalendarBreakdown) {
        let first_changed = self.fields.first_difference(&fields);
        self.fields = fields;
        if let Some(field) = first_changed {
            self.render_from(field);
        }
    }

    /// Re-render `first` and every finer field, keeping the coarser text as is.
    fn render_from(&mut self, first: CalendarField) {
        self.text.truncate(self.offsets[first.index()]);

        let f = &self.fields;
        for field in &CalendarField::ALL[first.index()..] {
            self.offsets[field.index()] = self.text.len();
            // Writing into a String cannot fail.
            let _ = match field {
                CalendarField::Year => write!(self.text, "{:04}-", f.year),
                CalendarField::Month => write!(self.text, "{:02}-", f.month),
                CalendarField::Day => write!(self.text, "{:02} ", f.day),
                CalendarField::Hour => write!(self.text, "{:02}:", f.hour),
                CalendarField::Minute => write!(self.text, "{:02}:", f.minute),
                CalendarField::Second => write!(self.text, "{:02}.", f.second),
                CalendarField::Micros => write!(self.text, "{:06}", f.micros),
            };
        }
    }
}

impl PrefixCache {
    pub fn new(tag: impl Into<String>, zone: Zone) -> Self {
        Self {
            tag: tag.into(),
            zone,
            last_update: None,
            rendered: None,
            output: String::with_capacity(64),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// Time passed to the most recent `update`.
    pub fn last_update(&self) -> Option<SystemTime> {
        self.last_update
    }

    /// Prefix for a line logged at `t` with severity `level`.
    pub fn update(&mut self, level: &str, t: SystemTime) -> &str {
        // Always break down again: zone rules may have changed since the last call.
        let fields = breakdown(t, &self.zone);

        match self.rendered.as_mut() {
            Some(rendered) => rendered.refresh(fields),
            None => self.rendered = Some(RenderedFields::new(fields)),
        }
        self.last_update = Some(t);

        self.output.clear();
        self.output.push_str(&self.tag);
        self.output.push(' ');
        if let Some(rendered) = &self.rendered {
            self.output.push_str(&rendered.text);
        }
        let _ = write!(self.output, " {level:<width$}  ", width = LEVEL_WIDTH);

        &self.output
    }
}
