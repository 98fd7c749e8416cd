mod health_tests;
mod subscription_crud_tests;
mod total_cost_tests;
