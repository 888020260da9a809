use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use proc_macro2::{Literal, Span};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;

/// Range of legal values for one channel, taken from its `#[range(min, max)]`
/// attribute.
struct ChannelRange {
    min: i64,
    max: i64,
}

fn take_range(field: &mut syn::Field) -> syn::Result<ChannelRange> {
    let position = field
        .attrs
        .iter()
        .position(|attr| attr.path().is_ident("range"));

    let Some(position) = position else {
        return Err(syn::Error::new_spanned(
            &field.ident,
            "every channel needs a #[range(min, max)] attribute",
        ));
    };

    let attr = field.attrs.remove(position);
    let bounds =
        attr.parse_args_with(Punctuated::<syn::LitInt, syn::Token![,]>::parse_terminated)?;

    if bounds.len() != 2 {
        return Err(syn::Error::new_spanned(
            attr,
            "expected exactly two bounds: #[range(min, max)]",
        ));
    }

    let min = bounds[0].base10_parse::<i64>()?;
    let max = bounds[1].base10_parse::<i64>()?;

    if min > max {
        return Err(syn::Error::new_spanned(attr, "min must not exceed max"));
    }

    Ok(ChannelRange { min, max })
}

/// Generate a range-checked color model with exactly three integer channels.
///
/// Each field carries a `#[range(min, max)]` attribute. The generated model
/// gets a fallible `new` taking `i32`s, a crate-private `new_unchecked`,
/// per-channel `*_MIN` / `*_MAX` constants, `to_array` and a `TryFrom<[i32; 3]>`
/// implementation.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each channel of the color.")
        }
        .into();
    }

    let mut ranges = Vec::with_capacity(3);
    for field in input.fields.iter_mut() {
        match take_range(field) {
            Ok(range) => ranges.push(range),
            Err(err) => return err.to_compile_error().into(),
        }

        // Channels are always readable; construction goes through `new`.
        field.vis = syn::Visibility::Public(Default::default());
    }

    let attr = syn::Attribute::parse_outer
        .parse2(quote! {
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let names = input
        .fields
        .iter()
        .map(|f| f.ident.clone().unwrap())
        .collect::<Vec<_>>();
    let types = input.fields.iter().map(|f| f.ty.clone()).collect::<Vec<_>>();
    let labels = names.iter().map(|n| n.to_string()).collect::<Vec<_>>();

    let mins = ranges
        .iter()
        .map(|r| Literal::i64_unsuffixed(r.min))
        .collect::<Vec<_>>();
    let maxs = ranges
        .iter()
        .map(|r| Literal::i64_unsuffixed(r.max))
        .collect::<Vec<_>>();

    let min_consts = labels
        .iter()
        .map(|l| {
            syn::Ident::new(
                &format!("{}_MIN", l.to_case(Case::UpperSnake)),
                Span::call_site(),
            )
        })
        .collect::<Vec<_>>();
    let max_consts = labels
        .iter()
        .map(|l| {
            syn::Ident::new(
                &format!("{}_MAX", l.to_case(Case::UpperSnake)),
                Span::call_site(),
            )
        })
        .collect::<Vec<_>>();

    let min_docs = labels
        .iter()
        .map(|l| format!("Smallest legal `{l}`."))
        .collect::<Vec<_>>();
    let max_docs = labels
        .iter()
        .map(|l| format!("Largest legal `{l}`."))
        .collect::<Vec<_>>();

    let struct_name = input.ident.clone();
    let (f1, f2, f3) = (&names[0], &names[1], &names[2]);

    let model_impl = quote! {
        impl #struct_name {
            #(
                #[doc = #min_docs]
                pub const #min_consts: #types = #mins;
                #[doc = #max_docs]
                pub const #max_consts: #types = #maxs;
            )*

            /// Create a new color, failing with [`crate::Error::OutOfRange`]
            /// when any channel is outside its legal range.
            pub fn new(#f1: i32, #f2: i32, #f3: i32) -> crate::Result<Self> {
                #(
                    if !(#mins..=#maxs).contains(&(#names as i64)) {
                        return Err(crate::Error::OutOfRange {
                            name: #labels,
                            value: #names as i64,
                            min: #mins,
                            max: #maxs,
                        });
                    }
                )*

                Ok(Self {
                    #(#names: #names as #types,)*
                })
            }

            /// Create a color from channels that are in range by construction.
            pub(crate) fn new_unchecked(#(#names: #types),*) -> Self {
                #(
                    debug_assert!(
                        (#mins..=#maxs).contains(&(#names as i64)),
                        concat!(#labels, " out of range"),
                    );
                )*

                Self { #(#names),* }
            }

            /// Return the three channels in declaration order.
            pub fn to_array(&self) -> [i32; 3] {
                [self.#f1 as i32, self.#f2 as i32, self.#f3 as i32]
            }
        }

        impl TryFrom<[i32; 3]> for #struct_name {
            type Error = crate::Error;

            fn try_from(value: [i32; 3]) -> crate::Result<Self> {
                Self::new(value[0], value[1], value[2])
            }
        }

        impl std::fmt::Display for #struct_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "({}, {}, {})", self.#f1, self.#f2, self.#f3)
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
