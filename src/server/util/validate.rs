//! Explicit request validators.
//!
//! Each validator checks a request DTO and either returns the typed parameters the
//! service layer expects or every field violation found. Messages follow the usual
//! bean-validation wording so clients see familiar text.

use uuid::Uuid;

use crate::{
    model::{
        beer::BeerDto,
        category::CategoryDto,
        customer::CustomerDto,
        order::{BeerOrderCreateDto, BeerOrderPatchDto, BeerOrderUpdateDto},
    },
    server::{
        error::validation::ValidationErrors,
        model::{
            beer::{BeerParams, BeerPatch},
            category::{CategoryParams, CategoryPatch},
            customer::{CustomerParams, CustomerPatch},
            order::{
                CreateBeerOrderParams, NewOrderLine, OrderLineParams, PatchBeerOrderParams,
                UpdateBeerOrderParams,
            },
        },
    },
};

pub const MUST_NOT_BE_NULL: &str = "must not be null";
pub const MUST_NOT_BE_BLANK: &str = "must not be blank";

pub const BEER_NAME_MAX: usize = 50;
pub const TEXT_MAX: usize = 255;

fn size_message(max: usize) -> String {
    format!("size must be between 0 and {}", max)
}

fn min_message(min: i32) -> String {
    format!("must be greater than or equal to {}", min)
}

/// Checks a required text field: present, non-blank and at most `max` characters.
fn required_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: &Option<String>,
    max: usize,
) -> Option<String> {
    match value {
        None => {
            errors.push(field, MUST_NOT_BE_NULL);
            errors.push(field, MUST_NOT_BE_BLANK);
            None
        }
        Some(text) if text.trim().is_empty() => {
            errors.push(field, MUST_NOT_BE_BLANK);
            None
        }
        Some(text) => {
            if text.chars().count() > max {
                errors.push(field, size_message(max));
            }
            Some(text.clone())
        }
    }
}

/// Checks an optional text field against `max` characters.
fn optional_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: &Option<String>,
    max: usize,
) -> Option<String> {
    let text = value.as_ref()?;
    if text.chars().count() > max {
        errors.push(field, size_message(max));
    }
    Some(text.clone())
}

/// Keeps a patch value only when it has text, checking it against `max` characters.
fn patch_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: &Option<String>,
    max: usize,
) -> Option<String> {
    let text = value.as_ref().filter(|t| !t.trim().is_empty())?;
    if text.chars().count() > max {
        errors.push(field, size_message(max));
    }
    Some(text.clone())
}

fn required<T: Copy>(errors: &mut ValidationErrors, field: &str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        errors.push(field, MUST_NOT_BE_NULL);
    }
    value
}

fn at_least(errors: &mut ValidationErrors, field: &str, value: Option<i32>, min: i32) {
    if let Some(v) = value {
        if v < min {
            errors.push(field, min_message(min));
        }
    }
}

/// Validates a beer for creation or full replacement.
///
/// Name and UPC must be present and non-blank (a missing value reports both the
/// null and the blank violation); style and price must be present; the name is
/// limited to 50 characters and the UPC to 255.
pub fn validate_beer(dto: &BeerDto) -> Result<BeerParams, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let beer_name = required_text(&mut errors, "beerName", &dto.beer_name, BEER_NAME_MAX);
    let beer_style = required(&mut errors, "beerStyle", dto.beer_style);
    let upc = required_text(&mut errors, "upc", &dto.upc, TEXT_MAX);
    let price = required(&mut errors, "price", dto.price);

    match (beer_name, beer_style, upc, price) {
        (Some(beer_name), Some(beer_style), Some(upc), Some(price)) if errors.is_empty() => {
            Ok(BeerParams {
                version: dto.version,
                beer_name,
                beer_style: beer_style.into(),
                upc,
                quantity_on_hand: dto.quantity_on_hand,
                price,
            })
        }
        _ => Err(errors),
    }
}

/// Validates a beer patch. Blank text fields are treated as not supplied.
pub fn validate_beer_patch(dto: &BeerDto) -> Result<BeerPatch, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let beer_name = patch_text(&mut errors, "beerName", &dto.beer_name, BEER_NAME_MAX);
    let upc = patch_text(&mut errors, "upc", &dto.upc, TEXT_MAX);

    errors.finish(|| BeerPatch {
        version: dto.version,
        beer_name,
        beer_style: dto.beer_style.map(Into::into),
        upc,
        quantity_on_hand: dto.quantity_on_hand,
        price: dto.price,
    })
}

pub fn validate_category(dto: &CategoryDto) -> Result<CategoryParams, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let description = required_text(&mut errors, "description", &dto.description, TEXT_MAX);

    match description {
        Some(description) if errors.is_empty() => Ok(CategoryParams {
            version: dto.version,
            description,
        }),
        _ => Err(errors),
    }
}

pub fn validate_category_patch(dto: &CategoryDto) -> Result<CategoryPatch, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let description = patch_text(&mut errors, "description", &dto.description, TEXT_MAX);

    errors.finish(|| CategoryPatch {
        version: dto.version,
        description,
    })
}

pub fn validate_customer(dto: &CustomerDto) -> Result<CustomerParams, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = required_text(&mut errors, "name", &dto.name, TEXT_MAX);
    let email = optional_text(&mut errors, "email", &dto.email, TEXT_MAX);

    match name {
        Some(name) if errors.is_empty() => Ok(CustomerParams {
            version: dto.version,
            name,
            email,
        }),
        _ => Err(errors),
    }
}

pub fn validate_customer_patch(dto: &CustomerDto) -> Result<CustomerPatch, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = patch_text(&mut errors, "name", &dto.name, TEXT_MAX);
    let email = patch_text(&mut errors, "email", &dto.email, TEXT_MAX);

    errors.finish(|| CustomerPatch {
        version: dto.version,
        name,
        email,
    })
}

/// Checks a shipment tracking number supplied inside an order body.
fn shipment_tracking(
    errors: &mut ValidationErrors,
    value: Option<&Option<String>>,
) -> Option<String> {
    let tracking = value?;
    match tracking {
        Some(text) if !text.trim().is_empty() => {
            if text.chars().count() > TEXT_MAX {
                errors.push("beerOrderShipment.trackingNumber", size_message(TEXT_MAX));
            }
            Some(text.clone())
        }
        _ => {
            errors.push("beerOrderShipment.trackingNumber", MUST_NOT_BE_BLANK);
            None
        }
    }
}

/// Validates a new order: customer required, every line needs a beer and a
/// quantity of at least 1, a supplied shipment needs a tracking number.
pub fn validate_order_create(
    dto: &BeerOrderCreateDto,
) -> Result<CreateBeerOrderParams, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let customer_id = required(&mut errors, "customerId", dto.customer_id);
    let customer_ref = optional_text(&mut errors, "customerRef", &dto.customer_ref, TEXT_MAX);

    let mut lines = Vec::with_capacity(dto.beer_order_lines.len());
    for (i, line) in dto.beer_order_lines.iter().enumerate() {
        let beer_id = required(&mut errors, &format!("beerOrderLines[{}].beerId", i), line.beer_id);
        let quantity_field = format!("beerOrderLines[{}].orderQuantity", i);
        let order_quantity = required(&mut errors, &quantity_field, line.order_quantity);
        at_least(&mut errors, &quantity_field, order_quantity, 1);

        if let (Some(beer_id), Some(order_quantity)) = (beer_id, order_quantity) {
            lines.push(NewOrderLine {
                beer_id,
                order_quantity,
            });
        }
    }

    let tracking_number = shipment_tracking(
        &mut errors,
        dto.beer_order_shipment.as_ref().map(|s| &s.tracking_number),
    );

    match customer_id {
        Some(customer_id) if errors.is_empty() => Ok(CreateBeerOrderParams {
            customer_id,
            customer_ref,
            lines,
            tracking_number,
        }),
        _ => Err(errors),
    }
}

/// Validates a full order replacement. Same rules as creation plus a
/// non-negative allocated quantity.
pub fn validate_order_update(
    dto: &BeerOrderUpdateDto,
) -> Result<UpdateBeerOrderParams, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let customer_id: Option<Uuid> = required(&mut errors, "customerId", dto.customer_id);
    let customer_ref = optional_text(&mut errors, "customerRef", &dto.customer_ref, TEXT_MAX);

    let mut lines = Vec::with_capacity(dto.beer_order_lines.len());
    for (i, line) in dto.beer_order_lines.iter().enumerate() {
        let beer_id = required(&mut errors, &format!("beerOrderLines[{}].beerId", i), line.beer_id);
        let quantity_field = format!("beerOrderLines[{}].orderQuantity", i);
        let order_quantity = required(&mut errors, &quantity_field, line.order_quantity);
        at_least(&mut errors, &quantity_field, order_quantity, 1);
        at_least(
            &mut errors,
            &format!("beerOrderLines[{}].quantityAllocated", i),
            line.quantity_allocated,
            0,
        );

        if let (Some(beer_id), Some(order_quantity)) = (beer_id, order_quantity) {
            lines.push(OrderLineParams {
                id: line.id,
                beer_id,
                order_quantity,
                quantity_allocated: line.quantity_allocated,
            });
        }
    }

    let tracking_number = shipment_tracking(
        &mut errors,
        dto.beer_order_shipment.as_ref().map(|s| &s.tracking_number),
    );

    match customer_id {
        Some(customer_id) if errors.is_empty() => Ok(UpdateBeerOrderParams {
            version: dto.version,
            customer_id,
            customer_ref,
            lines,
            tracking_number,
        }),
        _ => Err(errors),
    }
}

/// Validates an order patch. Blank values are treated as not supplied.
pub fn validate_order_patch(
    dto: &BeerOrderPatchDto,
) -> Result<PatchBeerOrderParams, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let customer_ref = patch_text(&mut errors, "customerRef", &dto.customer_ref, TEXT_MAX);
    let tracking_number = dto.beer_order_shipment.as_ref().and_then(|s| {
        patch_text(
            &mut errors,
            "beerOrderShipment.trackingNumber",
            &s.tracking_number,
            TEXT_MAX,
        )
    });

    errors.finish(|| PatchBeerOrderParams {
        version: dto.version,
        customer_ref,
        tracking_number,
    })
}
