use crate::utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Item, Result, Token, parse::Parse, parse::ParseStream, parse_macro_input};

/// #[value_object] 宏实现
/// - 支持结构体（具名或 tuple）与枚举
/// - 合并/追加派生：Clone, Serialize, Deserialize, PartialEq, Eq, Hash
/// - `debug`、`default` 两个开关分别控制 Debug 与 Default 的派生
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as ValueObjectAttrConfig);
    let mut input = parse_macro_input!(item as Item);

    let mut required: Vec<syn::Path> = vec![
        syn::parse_quote!(Clone),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
        syn::parse_quote!(Hash),
    ];

    if cfg.derive_default.unwrap_or(true) {
        required.insert(0, syn::parse_quote!(Default));
    }
    if cfg.derive_debug.unwrap_or(true) {
        required.insert(0, syn::parse_quote!(Debug));
    }

    match &mut input {
        Item::Struct(st) => {
            apply_derives(&mut st.attrs, required);
            TokenStream::from(quote! { #st })
        }
        Item::Enum(en) => {
            apply_derives(&mut en.attrs, required);
            TokenStream::from(quote! { #en })
        }
        other => syn::Error::new(other.span(), "#[value_object] only supports struct or enum")
            .to_compile_error()
            .into(),
    }
}

// -------- parsing --------

#[derive(Default)]
struct ValueObjectAttrConfig {
    derive_debug: Option<bool>,
    derive_default: Option<bool>,
}

impl Parse for ValueObjectAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut cfg = Self::default();
        if input.is_empty() {
            return Ok(cfg);
        }

        let pairs: Punctuated<ValueObjectAttrElem, Token![,]> =
            Punctuated::parse_terminated(input)?;

        for elem in pairs {
            let (slot, key) = match elem.key {
                AttrKey::Debug => (&mut cfg.derive_debug, "debug"),
                AttrKey::Default => (&mut cfg.derive_default, "default"),
            };
            if slot.is_some() {
                return Err(syn::Error::new(
                    elem.span,
                    format!("duplicate key '{}' in attribute", key),
                ));
            }
            *slot = Some(elem.value);
        }
        Ok(cfg)
    }
}

enum AttrKey {
    Debug,
    Default,
}

struct ValueObjectAttrElem {
    key: AttrKey,
    value: bool,
    span: proc_macro2::Span,
}

impl Parse for ValueObjectAttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        // `default` 是关键字，不能按 Ident 解析
        let (key, span) = if input.peek(Token![default]) {
            let kw: Token![default] = input.parse()?;
            (AttrKey::Default, kw.span)
        } else {
            let ident: syn::Ident = input.parse()?;
            if ident == "debug" {
                (AttrKey::Debug, ident.span())
            } else {
                return Err(syn::Error::new(
                    ident.span(),
                    "unknown key in attribute; expected 'debug' or 'default'",
                ));
            }
        };

        let _eq: Token![=] = input.parse()?;
        let lit: syn::LitBool = input
            .parse()
            .map_err(|e| syn::Error::new(e.span(), "expected boolean literal"))?;

        Ok(Self {
            key,
            value: lit.value(),
            span,
        })
    }
}
