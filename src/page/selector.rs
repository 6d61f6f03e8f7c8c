use crate::{
    foundation::error::{AuroraError, AuroraResult},
    page::document::{Document, Element},
};

/// Comma-separated list of selectors built from type, `#id`, `.class` and
/// `[attr]` / `[attr=value]` parts joined by descendant combinators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorList {
    selectors: Vec<Complex>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Complex {
    compounds: Vec<Compound>, // outermost first
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, Option<String>)>,
}

impl SelectorList {
    pub fn parse(src: &str) -> AuroraResult<Self> {
        let mut selectors = Vec::new();
        for part in src.split(',') {
            let part = part.trim();
            if part.is_empty() {
                return Err(AuroraError::validation(format!(
                    "empty selector in \"{src}\""
                )));
            }
            let compounds = part
                .split_whitespace()
                .map(parse_compound)
                .collect::<AuroraResult<Vec<_>>>()?;
            selectors.push(Complex { compounds });
        }
        Ok(Self { selectors })
    }

    pub fn matches(&self, doc: &Document, el: &Element) -> bool {
        self.selectors.iter().any(|s| s.matches(doc, el))
    }
}

impl Complex {
    fn matches(&self, doc: &Document, el: &Element) -> bool {
        let Some((last, ancestors)) = self.compounds.split_last() else {
            return false;
        };
        if !last.matches(el) {
            return false;
        }

        let mut cursor = el.parent;
        for compound in ancestors.iter().rev() {
            loop {
                let Some(id) = cursor else {
                    return false;
                };
                let Some(candidate) = doc.element(id) else {
                    return false;
                };
                cursor = candidate.parent;
                if compound.matches(candidate) {
                    break;
                }
            }
        }
        true
    }
}

impl Compound {
    fn matches(&self, el: &Element) -> bool {
        if let Some(tag) = &self.tag
            && !tag.eq_ignore_ascii_case(&el.tag)
        {
            return false;
        }
        if let Some(id) = &self.id
            && el.dom_id.as_deref() != Some(id.as_str())
        {
            return false;
        }
        if !self.classes.iter().all(|c| el.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|(name, value)| match value {
            None => el.attrs.contains_key(name),
            Some(v) => el.attr(name) == Some(v.as_str()),
        })
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(chars: &[char], pos: &mut usize) -> String {
    let start = *pos;
    while *pos < chars.len() && is_ident_char(chars[*pos]) {
        *pos += 1;
    }
    chars[start..*pos].iter().collect()
}

fn parse_compound(src: &str) -> AuroraResult<Compound> {
    let err = |what: &str| AuroraError::validation(format!("invalid selector \"{src}\": {what}"));
    let chars: Vec<char> = src.chars().collect();
    let mut pos = 0;
    let mut out = Compound::default();

    if chars.first() == Some(&'*') {
        pos = 1;
    } else if chars.first().is_some_and(|c| is_ident_char(*c)) {
        out.tag = Some(take_ident(&chars, &mut pos));
    }

    while pos < chars.len() {
        let c = chars[pos];
        pos += 1;
        match c {
            '#' | '.' => {
                let ident = take_ident(&chars, &mut pos);
                if ident.is_empty() {
                    return Err(err("expected a name"));
                }
                if c == '#' {
                    out.id = Some(ident);
                } else {
                    out.classes.push(ident);
                }
            }
            '[' => {
                let name = take_ident(&chars, &mut pos);
                if name.is_empty() {
                    return Err(err("expected an attribute name"));
                }
                let value = if chars.get(pos) == Some(&'=') {
                    pos += 1;
                    let quote = chars.get(pos).copied().filter(|q| *q == '"' || *q == '\'');
                    if quote.is_some() {
                        pos += 1;
                    }
                    let start = pos;
                    while pos < chars.len() && Some(chars[pos]) != quote && chars[pos] != ']' {
                        pos += 1;
                    }
                    let v: String = chars[start..pos].iter().collect();
                    if quote.is_some() {
                        if chars.get(pos) != quote.as_ref() {
                            return Err(err("unterminated attribute value"));
                        }
                        pos += 1;
                    }
                    Some(v)
                } else {
                    None
                };
                if chars.get(pos) != Some(&']') {
                    return Err(err("expected ']'"));
                }
                pos += 1;
                out.attrs.push((name, value));
            }
            other => return Err(err(&format!("unexpected character '{other}'"))),
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/page/selector.rs"]
mod tests;
