//! Inline constraint and default-value splitting.
//!
//! Runs over the text that follows a parameter name, e.g. `:int:range(1,10)=5`
//! for `{id:int:range(1,10)=5}`. Constraints are not interpreted, only cut
//! apart. The only subtlety is parentheses: a `:` or `=` inside a constraint's
//! argument list does not end the constraint as long as a `)` follows it
//! somewhere.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineSpec {
    pub constraints: Vec<String>,
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between constraints, expecting `:` or `=`.
    Start,
    /// Inside a constraint name.
    Name,
    /// Inside a constraint's `(...)` argument list.
    Parens,
}

/// Split `text` (starting at the `:`/`=` after the name, or empty) into
/// constraints and default value.
pub fn split_inline(text: &str) -> InlineSpec {
    let bytes = text.as_bytes();
    let mut spec = InlineSpec::default();
    let mut state = State::Start;
    let mut start = 0;
    let mut i = 0;

    let push = |spec: &mut InlineSpec, from: usize, to: usize| {
        let constraint = &text[from..to];
        if !constraint.is_empty() {
            spec.constraints.push(constraint.to_string());
        }
    };

    loop {
        let current = bytes.get(i).copied();
        match (state, current) {
            (_, None) => {
                if state != State::Start {
                    push(&mut spec, start, i);
                }
                break;
            }

            (State::Start, Some(b':')) => {
                state = State::Name;
                start = i + 1;
            }
            (State::Start, Some(b'=')) => {
                spec.default_value = Some(text[i + 1..].to_string());
                break;
            }
            (State::Start, Some(b'(')) => state = State::Parens,
            (State::Start, Some(_)) => {}

            (State::Name, Some(b':')) => {
                push(&mut spec, start, i);
                start = i + 1;
            }
            (State::Name, Some(b'(')) => state = State::Parens,
            (State::Name, Some(b'=')) => {
                push(&mut spec, start, i);
                spec.default_value = Some(text[i + 1..].to_string());
                break;
            }
            (State::Name, Some(_)) => {}

            // A `)` only closes the list when followed by the end, a new
            // constraint, or the default value.
            (State::Parens, Some(b')')) => match bytes.get(i + 1) {
                None => {
                    push(&mut spec, start, i + 1);
                    break;
                }
                Some(b':') => {
                    push(&mut spec, start, i + 1);
                    state = State::Start;
                }
                Some(b'=') => {
                    push(&mut spec, start, i + 1);
                    spec.default_value = Some(text[i + 2..].to_string());
                    break;
                }
                Some(_) => {}
            },
            (State::Parens, Some(delimiter @ (b':' | b'='))) => {
                match text[i + 1..].find(')') {
                    // Skip ahead; the `)` itself is not re-examined.
                    Some(offset) => i += 1 + offset,
                    None if delimiter == b':' => {
                        push(&mut spec, start, i);
                        start = i + 1;
                        state = State::Name;
                    }
                    None => {
                        push(&mut spec, start, i);
                        spec.default_value = Some(text[i + 1..].to_string());
                        break;
                    }
                }
            }
            (State::Parens, Some(_)) => {}
        }
        i += 1;
    }

    spec
}
