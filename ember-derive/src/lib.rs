extern crate proc_macro;

use proc_macro::{Delimiter, TokenStream, TokenTree};

struct EventAttributes {
    kind: String,
    categories: Vec<String>,
    custom_display: bool,
}

fn get_type_name(input: TokenStream) -> String {
    let mut iter = input.into_iter();
    loop {
        match iter.next() {
            Some(TokenTree::Ident(ident)) => {
                let name = ident.to_string();
                if name == "struct" || name == "enum" || name == "union" {
                    return iter.next().unwrap().to_string()
                }
            },
            None => break,
            _ => (),
        }
    }
    panic!("no type name found");
}

fn get_event_attributes(input: TokenStream) -> EventAttributes {
    let mut iter = input.into_iter().peekable();
    while let Some(token) = iter.next() {
        let is_pound = match token {
            TokenTree::Punct(ref punct) => punct.as_char() == '#',
            _ => false,
        };
        if !is_pound {
            continue;
        }

        if let Some(TokenTree::Group(attribute)) = iter.peek() {
            if attribute.delimiter() != Delimiter::Bracket {
                continue;
            }

            let mut inner = attribute.stream().into_iter();
            match (inner.next(), inner.next()) {
                (Some(TokenTree::Ident(ident)), Some(TokenTree::Group(arguments)))
                    if ident.to_string() == "event" && arguments.delimiter() == Delimiter::Parenthesis =>
                {
                    return parse_event_arguments(arguments.stream());
                },
                _ => (),
            }
        }
    }
    panic!("#[derive(Event)] requires an #[event(kind = ..., category = ...)] attribute");
}

fn parse_event_arguments(arguments: TokenStream) -> EventAttributes {
    let mut segments: Vec<Vec<TokenTree>> = vec![Vec::new()];
    for token in arguments {
        match token {
            TokenTree::Punct(ref punct) if punct.as_char() == ',' => segments.push(Vec::new()),
            token => segments.last_mut().unwrap().push(token),
        }
    }

    let mut kind = None;
    let mut categories = Vec::new();
    let mut custom_display = false;

    for segment in segments.into_iter().filter(|s| !s.is_empty()) {
        let mut iter = segment.into_iter();
        let key = match iter.next() {
            Some(TokenTree::Ident(ident)) => ident.to_string(),
            other => panic!("#[event(...)]: expected an argument name, found {:?}", other.map(|t| t.to_string())),
        };

        if key == "custom_display" {
            custom_display = true;
            continue;
        }

        match iter.next() {
            Some(TokenTree::Punct(ref punct)) if punct.as_char() == '=' => (),
            _ => panic!("#[event(...)]: expected `=` after `{}`", key),
        }

        match key.as_str() {
            "kind" => match (iter.next(), iter.next()) {
                (Some(TokenTree::Ident(ident)), None) => kind = Some(ident.to_string()),
                _ => panic!("#[event(...)]: `kind` must name a single EventKind variant"),
            },
            "category" => {
                let mut expect_ident = true;
                for token in iter {
                    match token {
                        TokenTree::Ident(ref ident) if expect_ident => categories.push(ident.to_string()),
                        TokenTree::Punct(ref punct) if !expect_ident && punct.as_char() == '|' => (),
                        other => panic!("#[event(...)]: unexpected `{}` in `category`", other),
                    }
                    expect_ident = !expect_ident;
                }
                if expect_ident {
                    panic!("#[event(...)]: `category` must be EventCategory flags joined by `|`");
                }
            },
            _ => panic!("#[event(...)]: unknown argument `{}`", key),
        }
    }

    EventAttributes {
        kind: kind.expect("#[event(...)]: missing `kind`"),
        categories,
        custom_display,
    }
}

fn category_expression(categories: &[String]) -> String {
    let mut iter = categories.iter();
    match iter.next() {
        Some(first) => iter.fold(
            format!("::ember::event::EventCategory::{}", first),
            |expression, category| format!("{}.union(::ember::event::EventCategory::{})", expression, category),
        ),
        None => "::ember::event::EventCategory::empty()".to_string(),
    }
}

/// Implements `Event` and `StaticEvent` for a struct carrying a `consumed: Consumed` field.
///
/// ```ignore
/// #[derive(Debug, Event)]
/// #[event(kind = MouseMoved, category = MOUSE | INPUT, custom_display)]
/// pub struct MouseMovedEvent { consumed: Consumed, x: f32, y: f32 }
/// ```
///
/// A `Display` impl writing the kind's name is generated unless `custom_display` is given.
#[proc_macro_derive(Event, attributes(event))]
pub fn derive_event(input: TokenStream) -> TokenStream {
    let type_name = get_type_name(input.clone());
    let attributes = get_event_attributes(input);

    let display = if attributes.custom_display {
        String::new()
    } else {
        format!("
    impl ::std::fmt::Display for {0} {{
        fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {{
            f.write_str(Event::get_name(self))
        }}
    }}", type_name)
    };

    format!("
const _: () = {{
    use ::ember::event::{{Consumed, ConsumedToken, Event, EventCategory, EventKind, StaticEvent}};

    impl StaticEvent for {0} {{
        const KIND: EventKind = EventKind::{1};
        const CATEGORY: EventCategory = {2};
    }}

    impl Event for {0} {{
        fn get_event_kind(&self) -> EventKind {{
            <Self as StaticEvent>::KIND
        }}

        fn get_category_flags(&self) -> EventCategory {{
            <Self as StaticEvent>::CATEGORY
        }}

        fn consumed(&self) -> &Consumed {{
            &self.consumed
        }}

        fn consumed_mut(&mut self, _: ConsumedToken) -> &mut Consumed {{
            &mut self.consumed
        }}
    }}
{3}
}};", type_name, attributes.kind, category_expression(&attributes.categories), display).parse().unwrap()
}
