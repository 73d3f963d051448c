/// Controls whether a [`LineLogger`](crate::LineLogger) terminates each rendered line with a newline.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator unless the line already ends with one.
    #[default]
    WithNewline,
    /// Emit the rendered line exactly as produced.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode terminates lines with a newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use lvlog_sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }

    /// Applies the newline policy to a rendered line buffer.
    ///
    /// A line that already ends in `\n` is left untouched so messages carrying
    /// their own terminator are not followed by a blank line.
    pub(crate) fn terminate(self, line: &mut Vec<u8>) {
        if self.append_newline() && line.last() != Some(&b'\n') {
            line.push(b'\n');
        }
    }
}

impl From<bool> for LineMode {
    /// Converts a boolean "append newline" flag into a [`LineMode`].
    ///
    /// ```
    /// use lvlog_sink::LineMode;
    ///
    /// assert_eq!(LineMode::from(true), LineMode::WithNewline);
    /// assert_eq!(LineMode::from(false), LineMode::WithoutNewline);
    /// ```
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}
