pub mod u501_contact_form;
