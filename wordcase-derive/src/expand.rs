use std::collections::HashMap;

use darling::{FromDeriveInput, FromVariant, ast::Data, util::Ignored};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Ident, LitStr, Result, ext::IdentExt};
use wordcase::Case;

#[derive(FromDeriveInput)]
#[darling(attributes(word_case), supports(enum_unit))]
struct WordCaseInput {
    ident: Ident,
    vis: syn::Visibility,
    data: Data<WordCaseVariant, Ignored>,
    /// The case style every variant name is converted to.
    rename_all: LitStr,
}

#[derive(FromVariant)]
#[darling(attributes(word_case))]
struct WordCaseVariant {
    /// The identifier of the variant.
    ident: Ident,
    /// The name override to use for the variant. Used verbatim.
    rename: Option<LitStr>,
}

impl WordCaseVariant {
    /// The name of the variant: the override if present, the converted identifier otherwise.
    fn name(&self, case: Case) -> Result<String> {
        let name = match &self.rename {
            Some(rename) => rename.value(),
            None => wordcase::convert(self.ident.unraw().to_string(), case),
        };

        if name.is_empty() {
            return Err(syn::Error::new_spanned(
                &self.ident,
                format!(
                    "Variant has no {case} name. Set one with #[word_case(rename = \"...\")]"
                ),
            ));
        }

        Ok(name)
    }
}

pub(crate) fn expand(input: &DeriveInput) -> Result<TokenStream> {
    let input = WordCaseInput::from_derive_input(input)?;

    let case: Case = input
        .rename_all
        .value()
        .parse()
        .map_err(|err| syn::Error::new_spanned(&input.rename_all, err))?;

    // `supports(enum_unit)` has already rejected structs and unions.
    let variants = input.data.take_enum().expect("input is an enum");

    if variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "WordCase needs at least one variant",
        ));
    }

    let mut names = Vec::with_capacity(variants.len());
    let mut seen = HashMap::with_capacity(variants.len());
    for variant in &variants {
        let name = variant.name(case)?;

        if let Some(previous) = seen.insert(name.clone(), &variant.ident) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!("Name '{name}' is already used by variant `{previous}`"),
            ));
        }

        names.push(name);
    }

    // The visibility of the enum
    let vis = &input.vis;
    // The identifier of the enum
    let ident = &input.ident;
    let type_name = ident.unraw().to_string();
    let variant_idents = variants.iter().map(|variant| &variant.ident).collect::<Vec<_>>();

    let names_doc = format!("The {case} names of all variants, in declaration order.");
    let name_doc = format!("The {case} name of this variant.");

    Ok(quote! {
        impl #ident {
            #[doc = #names_doc]
            #vis const CASE_NAMES: &'static [&'static str] = &[#(#names),*];

            #[doc = #name_doc]
            #vis const fn case_name(&self) -> &'static str {
                match self {
                    #(Self::#variant_idents => #names,)*
                }
            }
        }

        impl ::core::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.case_name())
            }
        }

        impl ::core::str::FromStr for #ident {
            type Err = ::wordcase::Error;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                match s {
                    #(#names => ::core::result::Result::Ok(Self::#variant_idents),)*
                    _ => ::core::result::Result::Err(::wordcase::Error::UnknownName {
                        type_name: #type_name,
                        name: ::std::string::ToString::to_string(s),
                    }),
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn expand_err(input: DeriveInput) -> String {
        match expand(&input) {
            Ok(tokens) => panic!("expected an error, got {tokens}"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn names_are_converted() {
        let input: DeriveInput = parse_quote! {
            #[word_case(rename_all = "kebab")]
            enum Field { UserID, V2Feature, #[word_case(rename = "id")] Identifier }
        };

        let tokens = expand(&input).unwrap().to_string();
        assert!(tokens.contains("\"user-id\""));
        assert!(tokens.contains("\"v2-feature\""));
        assert!(tokens.contains("\"id\""));
        assert!(!tokens.contains("\"identifier\""));
    }

    #[test]
    fn raw_identifiers_lose_their_prefix() {
        let input: DeriveInput = parse_quote! {
            #[word_case(rename_all = "snake")]
            enum Keyword { r#Type, r#MatchArm }
        };

        let tokens = expand(&input).unwrap().to_string();
        assert!(tokens.contains("\"type\""));
        assert!(tokens.contains("\"match_arm\""));
    }

    #[test]
    fn unknown_case() {
        let err = expand_err(parse_quote! {
            #[word_case(rename_all = "pascal")]
            enum Kind { A }
        });
        assert!(err.contains("unknown case style 'pascal'"), "{err}");
    }

    #[test]
    fn missing_rename_all() {
        let err = expand_err(parse_quote! {
            enum Kind { A }
        });
        assert!(err.contains("rename_all"), "{err}");
    }

    #[test]
    fn duplicate_names() {
        let err = expand_err(parse_quote! {
            #[word_case(rename_all = "camel")]
            enum Kind { UserId, UserID }
        });
        assert!(err.contains("'userId' is already used by variant `UserId`"), "{err}");
    }

    #[test]
    fn empty_names() {
        let err = expand_err(parse_quote! {
            #[word_case(rename_all = "dollar-camel")]
            enum Version { Latest, _2 }
        });
        assert!(err.contains("has no dollar-camel name"), "{err}");
    }

    #[test]
    fn only_unit_enums() {
        let err = expand_err(parse_quote! {
            #[word_case(rename_all = "kebab")]
            struct Config { name: String }
        });
        assert!(err.contains("Unsupported shape"), "{err}");
        expand_err(parse_quote! {
            #[word_case(rename_all = "kebab")]
            enum Shape { Circle(f64) }
        });
        expand_err(parse_quote! {
            #[word_case(rename_all = "kebab")]
            enum Empty {}
        });
    }
}
