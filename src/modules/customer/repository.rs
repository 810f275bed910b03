use super::dto::{CreateCustomerDto, UpdateCustomerDto};
use crate::entity::Customer;
use crate::error::Error;
use chrono::Utc;
use uuid::Uuid;

pub fn find_customer<'a>(
    customers: &'a [Customer],
    customer_id: &str,
) -> Result<&'a Customer, Error> {
    customers
        .iter()
        .find(|customer| customer.id == customer_id)
        .ok_or(Error::NotFound("customer"))
}

pub fn create_customer(customers: &mut Vec<Customer>, dto: CreateCustomerDto) -> Customer {
    let customer = Customer {
        id: Uuid::new_v4().to_string(),
        created_at: Utc::now(),
        first_name: dto.first_name,
        last_name: dto.last_name,
        email: dto.email,
        phone: dto.phone,
        id_card_number: dto.id_card_number,
        drivers_license_number: dto.drivers_license_number,
        drivers_license_image_path: dto.drivers_license_image_path,
    };

    customers.push(customer.clone());

    customer
}

pub fn update_customer(
    customers: &mut [Customer],
    customer_id: &str,
    dto: UpdateCustomerDto,
) -> Result<Customer, Error> {
    let customer = customers
        .iter_mut()
        .find(|customer| customer.id == customer_id)
        .ok_or(Error::NotFound("customer"))?;

    if let Some(first_name) = dto.first_name {
        customer.first_name = first_name;
    }
    if let Some(last_name) = dto.last_name {
        customer.last_name = last_name;
    }
    if let Some(email) = dto.email {
        customer.email = email;
    }
    if let Some(phone) = dto.phone {
        customer.phone = phone;
    }
    if let Some(id_card_number) = dto.id_card_number {
        customer.id_card_number = id_card_number;
    }
    if let Some(drivers_license_number) = dto.drivers_license_number {
        customer.drivers_license_number = drivers_license_number;
    }

    Ok(customer.clone())
}

/// removes a customer again, only used to roll back a failed request approval,
/// customers have no delete operation so the rental history stays whole
pub(crate) fn remove_customer(customers: &mut Vec<Customer>, customer_id: &str) {
    customers.retain(|customer| customer.id != customer_id);
}
